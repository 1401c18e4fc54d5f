//! Text menu driving the workflows
//!
//! Each choice collects its arguments, runs one workflow to completion and
//! prints the rows. A failing workflow is reported and the menu continues.

use std::io::{self, BufRead, Write};

use serde_json::json;
use tracing::warn;

use bornes::application::VehicleDetailsSource;
use bornes::domain::{
    CompanyContact, DomainError, DomainResult, StationListing, VehicleDetails, VehicleKey,
};
use bornes::AppHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Tuples,
    Json,
}

const MENU: &str = "\
Main menu:
1. Stations with their price and address.
2. Type 2 stations.
3. Stations for a charge type.
4. Maintaining company contact for a station.
5. Stations for my vehicle (registers unknown vehicles).
6. Update a station's address.
7. Remove a station for maintenance.
8. Quit.";

/// Read one line; `None` once stdin is closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Asks the user for the colour and charge type of an unregistered vehicle.
struct StdinDetails;

impl VehicleDetailsSource for StdinDetails {
    fn vehicle_details(&mut self, key: &VehicleKey) -> DomainResult<VehicleDetails> {
        println!("{} is not in the directory yet.", key);
        let read = |label: &str| -> DomainResult<String> {
            prompt(label)
                .map_err(|e| DomainError::Validation(format!("cannot read input: {}", e)))?
                .ok_or_else(|| DomainError::Validation("input closed".to_string()))
        };
        let color = read("Vehicle colour: ")?;
        let charge_type = read("Charge type: ")?;
        Ok(VehicleDetails { color, charge_type })
    }
}

fn print_stations(rows: &[StationListing], output: Output) {
    for r in rows {
        match output {
            Output::Tuples => println!(
                "({:?}, {:?}, {:?}, {})",
                r.station_id, r.city, r.address, r.price
            ),
            Output::Json => println!("{}", json!(r)),
        }
    }
}

/// Type 2 rows lead with the location.
fn print_type2(rows: &[StationListing], output: Output) {
    for r in rows {
        match output {
            Output::Tuples => println!(
                "({:?}, {:?}, {:?}, {})",
                r.city, r.address, r.station_id, r.price
            ),
            Output::Json => println!(
                "{}",
                json!({
                    "city": r.city,
                    "address": r.address,
                    "station_id": r.station_id,
                    "price": r.price,
                })
            ),
        }
    }
}

fn print_contacts(rows: &[CompanyContact], output: Output) {
    for r in rows {
        match output {
            Output::Tuples => println!("({:?}, {:?}, {:?})", r.company_name, r.email, r.phone),
            Output::Json => println!("{}", json!(r)),
        }
    }
}

/// Run one menu choice. `Ok(false)` means quit.
async fn dispatch(
    app: &AppHandle,
    choice: &str,
    output: Output,
) -> io::Result<Result<bool, DomainError>> {
    macro_rules! ask {
        ($label:expr) => {
            match prompt($label)? {
                Some(v) => v,
                None => return Ok(Ok(false)),
            }
        };
    }

    let outcome = match choice {
        "1" => app
            .stations
            .list_stations_with_price_and_address()
            .await
            .map(|rows| print_stations(&rows, output)),
        "2" => app
            .stations
            .list_type2_stations()
            .await
            .map(|rows| print_type2(&rows, output)),
        "3" => {
            let charge_type = ask!("Charge type: ");
            app.stations
                .list_stations_by_charge_type(&charge_type)
                .await
                .map(|rows| print_stations(&rows, output))
        }
        "4" => {
            let station_id = ask!("Station number: ");
            app.stations
                .get_company_contact_for_station(&station_id)
                .await
                .map(|rows| print_contacts(&rows, output))
        }
        "5" => {
            let brand = ask!("Vehicle brand: ");
            let model = ask!("Vehicle model: ");
            app.vehicles
                .register_vehicle(&VehicleKey::new(brand, model), &mut StdinDetails)
                .await
                .map(|rows| print_stations(&rows, output))
        }
        "6" => {
            let station_id = ask!("Station number: ");
            let city = ask!("New city: ");
            let address = ask!("New address: ");
            app.stations.update_location(&station_id, &address, &city).await
        }
        "7" => {
            let station_id = ask!("Station number: ");
            app.stations.remove_station(&station_id).await.map(|_| ())
        }
        "8" => return Ok(Ok(false)),
        _ => {
            println!("Invalid choice.");
            Ok(())
        }
    };

    Ok(outcome.map(|()| true))
}

pub async fn run(app: &AppHandle, output: Output) -> io::Result<()> {
    loop {
        println!("{}", MENU);
        let Some(choice) = prompt("Your choice: ")? else {
            return Ok(());
        };

        match dispatch(app, choice.trim(), output).await? {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(e) => {
                warn!(choice = choice.trim(), "Operation failed: {}", e);
                println!("Error: {}", e);
            }
        }
        println!();
    }
}

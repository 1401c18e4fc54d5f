//! Host functions registered on every SQLite connection
//!
//! SQLite ships without `power`, and the `Bornes` view computes current
//! prices with it. The function is registered through the raw connection
//! handle each time the pool opens a connection.

use std::ffi::c_int;

use libsqlite3_sys as ffi;
use sea_orm::sqlx::sqlite::SqliteConnection;
use tracing::debug;

/// A numeric SQL value as seen by `power`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Real(f64),
}

impl Numeric {
    fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(i) => i as f64,
            Numeric::Real(r) => r,
        }
    }
}

/// `base` raised to `exponent`.
///
/// Integer operands with a non-negative exponent stay integral as long as the
/// result fits in an `i64`; everything else is computed in floating point.
pub fn power(base: Numeric, exponent: Numeric) -> Numeric {
    if let (Numeric::Integer(b), Numeric::Integer(e)) = (base, exponent) {
        if let Ok(e) = u32::try_from(e) {
            if let Some(v) = b.checked_pow(e) {
                return Numeric::Integer(v);
            }
        }
    }
    Numeric::Real(base.as_f64().powf(exponent.as_f64()))
}

/// Register `power(base, exponent)` on this connection.
pub async fn register_power(conn: &mut SqliteConnection) -> Result<(), sea_orm::sqlx::Error> {
    let mut handle = conn.lock_handle().await?;
    let db = handle.as_raw_handle().as_ptr();

    // SAFETY: `db` is a live handle guarded by `handle` for the duration of
    // the call; the function keeps no user data, so no destructor is needed.
    let rc = unsafe {
        ffi::sqlite3_create_function_v2(
            db,
            c"power".as_ptr(),
            2,
            ffi::SQLITE_UTF8 | ffi::SQLITE_DETERMINISTIC,
            std::ptr::null_mut(),
            Some(power_callback),
            None,
            None,
            None,
        )
    };

    if rc != ffi::SQLITE_OK {
        return Err(sea_orm::sqlx::Error::Protocol(format!(
            "sqlite3_create_function_v2(power) failed with code {}",
            rc
        )));
    }

    debug!("Registered SQL function power/2");
    Ok(())
}

/// Read one argument; `None` for NULL. Text and blobs are coerced by SQLite's
/// numeric conversion rules.
unsafe fn numeric_arg(value: *mut ffi::sqlite3_value) -> Option<Numeric> {
    match ffi::sqlite3_value_numeric_type(value) {
        ffi::SQLITE_NULL => None,
        ffi::SQLITE_INTEGER => Some(Numeric::Integer(ffi::sqlite3_value_int64(value))),
        _ => Some(Numeric::Real(ffi::sqlite3_value_double(value))),
    }
}

unsafe extern "C" fn power_callback(
    ctx: *mut ffi::sqlite3_context,
    argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    // SQLite only dispatches here with the registered arity.
    let args = std::slice::from_raw_parts(argv, argc as usize);
    match (numeric_arg(args[0]), numeric_arg(args[1])) {
        (Some(base), Some(exponent)) => match power(base, exponent) {
            Numeric::Integer(v) => ffi::sqlite3_result_int64(ctx, v),
            Numeric::Real(v) => ffi::sqlite3_result_double(ctx, v),
        },
        _ => ffi::sqlite3_result_null(ctx),
    }
}

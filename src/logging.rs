//! Thin structured-logging shims over `defmt`.
//!
//! Every call site corresponds to one `LOGP(DL1C, LOGL_*, ...)` in the
//! source. With the `defmt` feature off these are no-ops, so call sites
//! never need to be feature-gated themselves.

#[allow(unused_variables)]
pub fn log_error(msg: &str) {
    #[cfg(feature = "defmt")]
    defmt::error!("{}", msg);
}

#[allow(unused_variables)]
pub fn log_fatal(msg: &str) {
    #[cfg(feature = "defmt")]
    defmt::error!("FATAL: {}", msg);
}

#[allow(unused_variables)]
pub fn log_notice(msg: &str) {
    #[cfg(feature = "defmt")]
    defmt::warn!("{}", msg);
}

#[allow(unused_variables)]
pub fn log_info(msg: &str) {
    #[cfg(feature = "defmt")]
    defmt::info!("{}", msg);
}

#[allow(unused_variables)]
pub fn log_debug(msg: &str) {
    #[cfg(feature = "defmt")]
    defmt::debug!("{}", msg);
}

pub mod currency;
pub mod date_formatter;
pub mod time_ticks;

pub mod comparator;
pub mod comparison;
pub mod error;
pub mod profile;
pub mod tariff;

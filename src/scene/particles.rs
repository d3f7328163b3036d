pub mod clouds;
pub mod fog;
pub mod lightning;
pub mod precip;
pub mod snow;
pub mod splash;
pub mod wind;

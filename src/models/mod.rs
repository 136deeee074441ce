mod response;
mod stock;

pub use response::*;
pub use stock::*;

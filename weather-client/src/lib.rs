//! Consumer side of the weather proxy: typed calls, the search flow, the
//! two-screen view model and text rendering.

pub mod error;
pub mod proxy;
pub mod render;
pub mod search;
pub mod units;
pub mod view;

pub use error::ClientError;
pub use proxy::ProxyClient;
pub use units::Unit;
pub use view::{Session, Snapshot, View};

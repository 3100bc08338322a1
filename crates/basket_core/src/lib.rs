pub mod domain;
pub mod payment;
pub mod ports;
pub mod reconcile;

pub use domain::{Account, Balance, Category, Product};
pub use payment::{apply_payment, compute_balance, PaymentOutcome};
pub use ports::{AccountStore, PortError, PortResult};
pub use reconcile::reconcile;

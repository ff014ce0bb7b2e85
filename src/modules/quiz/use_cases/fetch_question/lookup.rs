use crate::modules::quiz::core::catalog;
use crate::modules::quiz::core::question::{DeliveryMethod, Question};

/// Parses a raw id as received over HTTP and looks it up for one delivery
/// style. Anything that is not a plain number is simply not found.
pub fn lookup(raw_id: &str, method: DeliveryMethod) -> Option<&'static Question> {
    let id = catalog::parse_id(raw_id)?;
    let found = catalog::find_for_delivery(id, method);
    tracing::debug!(id, ?method, found = found.is_some(), "question lookup");
    found
}

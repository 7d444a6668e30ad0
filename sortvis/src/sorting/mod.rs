use std::future::Future;
use std::pin::Pin;

use crate::model::Sequence;
use crate::runtime::registry::DriverRegistry;

pub mod animator;
pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod registration_macros;
pub mod selection;

pub use animator::{Animator, RunStats};

/// Static metadata for one sorting algorithm
#[derive(Debug)]
pub struct DriverConfig {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub stable: bool,
}

/// A running sort. Resolves to the sorted working copy.
pub type DriverFuture = Pin<Box<dyn Future<Output = Sequence>>>;
pub type DriverFn = fn(Animator, Sequence) -> DriverFuture;

pub fn default_registry() -> Result<DriverRegistry, String> {
    crate::register_drivers! {
        "Elementary" => [insertion, selection, bubble],
        "Divide and conquer" => [merge, quick],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_groups_every_algorithm() {
        let registry = default_registry().expect("default registry");

        assert_eq!(
            registry.names(),
            vec!["insertion", "selection", "bubble", "merge", "quick"]
        );
        let titles: Vec<&str> = registry
            .categories()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Elementary", "Divide and conquer"]);
        assert_eq!(registry.categories()[1].drivers, vec!["merge", "quick"]);
    }

    #[test]
    fn macro_stops_at_the_first_failing_category() {
        let result = crate::register_drivers! {
            "First" => [insertion],
            "Second" => [merge, insertion],
            "Third" => [quick],
        };

        let err = result.err().unwrap_or_default();
        assert!(err.contains("'Second'"), "{}", err);
        assert!(err.contains("insertion"), "{}", err);
    }
}

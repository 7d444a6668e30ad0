use indexmap::IndexMap;

use crate::sorting::{DriverConfig, DriverFn};

#[derive(Clone, Copy, Debug)]
pub struct DriverEntry {
    pub config: &'static DriverConfig,
    pub run: DriverFn,
}

impl DriverEntry {
    pub fn name(&self) -> &'static str {
        self.config.name
    }
}

/// Titled group of driver names, in the order they were added
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DriverCategory {
    pub title: String,
    pub drivers: Vec<String>,
}

#[derive(Default)]
pub struct DriverRegistry {
    entries: IndexMap<String, DriverEntry>,
    categories: Vec<DriverCategory>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: DriverEntry) -> Result<(), String> {
        let name = entry.name();
        if self.entries.contains_key(name) {
            return Err(format!("duplicate driver registration: {}", name));
        }

        self.entries.insert(name.to_string(), entry);

        Ok(())
    }

    /// Registers `entries` and files them under `title`. Names come from
    /// each entry's config.
    pub fn add_category(
        &mut self,
        title: impl Into<String>,
        entries: &[DriverEntry],
    ) -> Result<(), String> {
        let title = title.into();
        if self.categories.iter().any(|c| c.title == title) {
            return Err(format!("duplicate category: {}", title));
        }

        let mut drivers = Vec::with_capacity(entries.len());
        for entry in entries {
            self.register(*entry)
                .map_err(|e| format!("category '{}': {}", title, e))?;
            drivers.push(entry.name().to_string());
        }

        self.categories.push(DriverCategory { title, drivers });

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<DriverEntry> {
        self.entries.get(name).copied()
    }

    /// Like [`Self::get`] but with an error listing what is available
    pub fn lookup(&self, name: &str) -> Result<DriverEntry, String> {
        self.get(name).ok_or_else(|| {
            format!(
                "unknown algorithm '{}' (expected one of: {})",
                name,
                self.names().join(", ")
            )
        })
    }

    /// Registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn categories(&self) -> &[DriverCategory] {
        &self.categories
    }
}

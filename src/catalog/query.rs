//! Read-only queries over a loaded [`Catalog`].
//!
//! Everything here borrows from the catalog; results are built per request and
//! serialized straight into the response.

use {
    crate::catalog::model::{Brand, Catalog, Model},
    serde::Serialize,
};

/// Model filter built from the `model` and `year` query parameters.
///
/// An empty or absent parameter does not filter.
#[derive(Debug, Default)]
pub struct SearchFilter {
    model: Option<String>,
    year: Option<String>,
}

impl SearchFilter {
    pub fn new(model: Option<&str>, year: Option<&str>) -> Self {
        Self {
            model: model.filter(|m| !m.is_empty()).map(str::to_lowercase),
            year: year.filter(|y| !y.is_empty()).map(str::to_owned),
        }
    }

    pub fn matches(&self, model: &Model) -> bool {
        if let Some(needle) = &self.model {
            let name = model.model_name().unwrap_or("").to_lowercase();

            if !name.contains(needle.as_str()) {
                return false;
            }
        }

        if let Some(year) = &self.year {
            // Compared as text: `202` must not match `2020`.
            let stored = model.year().map(|y| y.to_string()).unwrap_or_default();

            if &stored != year {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SearchHit<'c> {
    pub brand: &'c str,
    pub model_name: Option<&'c str>,
    pub year: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults<'c> {
    pub count: usize,
    pub results: Vec<SearchHit<'c>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct YearRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct Statistics<'c> {
    pub total_brands: usize,
    pub total_models: usize,
    pub year_range: YearRange,
    pub brands: Vec<&'c str>,
}

impl Catalog {
    /// First brand whose name equals `name`, ignoring case.
    pub fn find_brand(&self, name: &str) -> Option<&Brand> {
        let name = name.to_lowercase();

        self.brands
            .iter()
            .find(|brand| brand.name.to_lowercase() == name)
    }

    /// Every model passing `filter`, in catalog order.
    pub fn search(&self, filter: &SearchFilter) -> SearchResults<'_> {
        let results: Vec<_> = self
            .brands
            .iter()
            .flat_map(|brand| brand.models.iter().map(move |model| (brand, model)))
            .filter(|(_, model)| filter.matches(model))
            .map(|(brand, model)| SearchHit {
                brand: &brand.name,
                model_name: model.model_name(),
                year: model.year(),
            })
            .collect();

        SearchResults {
            count: results.len(),
            results,
        }
    }

    pub fn statistics(&self) -> Statistics<'_> {
        let years = || {
            self.brands
                .iter()
                .flat_map(|brand| brand.models.iter())
                .filter_map(Model::year)
        };

        Statistics {
            total_brands: self.brands.len(),
            total_models: self.brands.iter().map(|brand| brand.models.len()).sum(),
            year_range: YearRange {
                min: years().min(),
                max: years().max(),
            },
            brands: self.brands.iter().map(|brand| brand.name.as_str()).collect(),
        }
    }
}

//! Data Processor Module
//! Collapses observations into one latest-complete-year record per country.

use crate::data::record::{CountryRecord, Observation, YearRecord};
use std::collections::{BTreeMap, HashMap};

/// Year records for one country, keyed by year.
#[derive(Debug, Clone)]
struct CountryYears {
    country: String,
    years: BTreeMap<i32, YearRecord>,
}

impl CountryYears {
    fn latest_complete(&self) -> Option<&YearRecord> {
        self.years.values().rev().find(|record| record.is_complete())
    }
}

/// Accumulator built fresh for each reduction; never shared between runs.
#[derive(Debug, Default)]
struct YearIndex {
    countries: Vec<CountryYears>,
    positions: HashMap<String, usize>,
}

impl YearIndex {
    fn insert(&mut self, observation: &Observation) {
        let idx = match self.positions.get(&observation.country) {
            Some(&idx) => idx,
            None => {
                self.countries.push(CountryYears {
                    country: observation.country.clone(),
                    years: BTreeMap::new(),
                });
                let idx = self.countries.len() - 1;
                self.positions.insert(observation.country.clone(), idx);
                idx
            }
        };

        let CountryYears { country, years } = &mut self.countries[idx];
        years
            .entry(observation.year)
            .or_insert_with(|| YearRecord::new(country, observation.year))
            .set(observation.metric, observation.value);
    }
}

/// Handles the per-country reduction.
pub struct DataProcessor;

impl DataProcessor {
    /// Group observations by country then year and keep, per country, the
    /// latest year that has both metrics. Countries with no such year are
    /// dropped. Output follows the order countries were first seen.
    pub fn reduce<'a, I>(observations: I) -> Vec<CountryRecord>
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let mut index = YearIndex::default();
        for observation in observations {
            index.insert(observation);
        }

        index
            .countries
            .iter()
            .filter_map(CountryYears::latest_complete)
            .filter_map(CountryRecord::from_year_record)
            .collect()
    }
}

//! Dynamic min/max bounds of the paired range filters.
//!
//! Three pairs are kept consistent: start/end date, min/max UVL count and
//! min/max configuration count. Input is never rejected; instead each field of a
//! pair narrows the selectable range of the other one. Malformed input counts as
//! "no constraint".

use chrono::NaiveDate;

use crate::explore_const::NUMERIC_FLOOR_RESET;
use crate::filter_state::{FilterField, FilterState};

/// Update for a single bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundUpdate<T> {
    Set(T),
    Clear,
}

/// Selectable range limits of one numeric min/max pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountBounds {
    /// `min` attribute of the max field.
    pub max_field_floor: Option<i64>,
    /// `max` attribute of the min field.
    pub min_field_ceiling: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    /// `min` attribute of the end date field.
    pub end_date_min: Option<NaiveDate>,
    /// `max` attribute of the start date field.
    pub start_date_max: Option<NaiveDate>,
}

/// All dynamic bounds of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterBounds {
    pub dates: DateBounds,
    pub uvl: CountBounds,
    pub configurations: CountBounds,
}

/// Changes produced by one filter edit. `None` entries leave the bound untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsPatch {
    pub end_date_min: Option<BoundUpdate<NaiveDate>>,
    pub start_date_max: Option<BoundUpdate<NaiveDate>>,
    pub max_uvl_floor: Option<BoundUpdate<i64>>,
    pub min_uvl_ceiling: Option<BoundUpdate<i64>>,
    pub max_configurations_floor: Option<BoundUpdate<i64>>,
    pub min_configurations_ceiling: Option<BoundUpdate<i64>>,
}

impl BoundsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn apply_update<T: Copy>(target: &mut Option<T>, update: Option<BoundUpdate<T>>) {
    match update {
        Some(BoundUpdate::Set(value)) => *target = Some(value),
        Some(BoundUpdate::Clear) => *target = None,
        None => {}
    }
}

impl FilterBounds {
    /// Bounds computed from scratch, used on page load and after clearing filters.
    pub fn initial(state: &FilterState, today: NaiveDate) -> Self {
        Self {
            dates: initial_date_bounds(state.start_date(), state.end_date(), today),
            uvl: initial_count_bounds(state.min_uvl(), state.max_uvl()),
            configurations: initial_count_bounds(
                state.min_num_configurations(),
                state.max_num_configurations(),
            ),
        }
    }

    pub fn apply(&mut self, patch: &BoundsPatch) {
        apply_update(&mut self.dates.end_date_min, patch.end_date_min);
        apply_update(&mut self.dates.start_date_max, patch.start_date_max);
        apply_update(&mut self.uvl.max_field_floor, patch.max_uvl_floor);
        apply_update(&mut self.uvl.min_field_ceiling, patch.min_uvl_ceiling);
        apply_update(&mut self.configurations.max_field_floor, patch.max_configurations_floor);
        apply_update(&mut self.configurations.min_field_ceiling, patch.min_configurations_ceiling);
    }
}

/// Start date may never lie after today; an end date narrows it further.
fn start_date_ceiling(end_date: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    match end_date {
        Some(end) => end.min(today),
        None => today,
    }
}

pub fn initial_date_bounds(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> DateBounds {
    DateBounds {
        end_date_min: start_date.filter(|start| *start <= today),
        start_date_max: Some(start_date_ceiling(end_date, today)),
    }
}

pub fn initial_count_bounds(min: Option<i64>, max: Option<i64>) -> CountBounds {
    CountBounds { max_field_floor: min, min_field_ceiling: max }
}

/// Bound changes caused by an edit of `changed`, given the state after the edit.
///
/// Only the pair containing `changed` is touched; fields outside the three pairs
/// produce an empty patch.
pub fn derive_bounds(changed: FilterField, state: &FilterState, today: NaiveDate) -> BoundsPatch {
    let mut patch = BoundsPatch::default();
    match changed {
        FilterField::StartDate => {
            patch.end_date_min = Some(match state.start_date() {
                Some(start) => BoundUpdate::Set(start),
                None => BoundUpdate::Clear,
            });
        }
        FilterField::EndDate => {
            patch.start_date_max = Some(BoundUpdate::Set(start_date_ceiling(state.end_date(), today)));
        }
        FilterField::MinUvl => patch.max_uvl_floor = Some(floor_update(state.min_uvl())),
        FilterField::MaxUvl => patch.min_uvl_ceiling = Some(ceiling_update(state.max_uvl())),
        FilterField::MinConfigurations => {
            patch.max_configurations_floor = Some(floor_update(state.min_num_configurations()));
        }
        FilterField::MaxConfigurations => {
            patch.min_configurations_ceiling = Some(ceiling_update(state.max_num_configurations()));
        }
        FilterField::Query
        | FilterField::PublicationType
        | FilterField::ByValidUvls
        | FilterField::Sorting => {}
    }
    patch
}

fn floor_update(min_value: Option<i64>) -> BoundUpdate<i64> {
    BoundUpdate::Set(min_value.unwrap_or(NUMERIC_FLOOR_RESET))
}

fn ceiling_update(max_value: Option<i64>) -> BoundUpdate<i64> {
    match max_value {
        Some(value) => BoundUpdate::Set(value),
        None => BoundUpdate::Clear,
    }
}

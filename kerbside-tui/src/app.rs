use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use kerbside_core::{
    model::{BinSchedule, RegionId},
    service::{KerbsideService, SuburbOutlook},
};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Screen {
    RegionSelect,
    ScheduleSearch,
    OutlookView,
}

pub(crate) struct App {
    pub service: Arc<KerbsideService>,

    pub screen: Screen,
    pub regions: Vec<(RegionId, String)>,
    pub region_list_index: usize,
    pub selected_region: Option<RegionId>,

    pub search_input: String,
    pub search_results: Vec<BinSchedule>,
    pub result_list_index: usize,

    pub outlook: Option<SuburbOutlook>,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    /// How far ahead outlook calendars reach.
    pub(crate) const HORIZON_WEEKS: u32 = 8;

    pub(crate) fn new(service: Arc<KerbsideService>) -> Self {
        let regions = service.regions();
        Self {
            service,
            screen: Screen::RegionSelect,
            regions,
            region_list_index: 0,
            selected_region: None,
            search_input: String::new(),
            search_results: Vec::new(),
            result_list_index: 0,
            outlook: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    pub(crate) fn select_current_region(&mut self) {
        if let Some((id, _name)) = self.regions.get(self.region_list_index) {
            self.selected_region = Some(id.clone());
            self.screen = Screen::ScheduleSearch;
        }
    }

    pub(crate) fn select_current_result(&mut self) -> Option<String> {
        let suburb = self
            .search_results
            .get(self.result_list_index)?
            .suburb
            .clone();
        self.screen = Screen::OutlookView;
        Some(suburb)
    }
}

//! Render-independent model of the filter bar.
//!
//! [`FilterBarView::build`] decides which controls appear, what their triggers say
//! and which intent each menu click produces. The Dioxus components render this
//! model and route clicks through [`MenuItem::click`] and [`MenuItem::click_check`],
//! so the interaction contract can be tested without a renderer.

use crate::catalog::FacilityCatalog;
use crate::intent::{FilterIntent, FilterSink};
use crate::labels;
use crate::presets::DatePreset;
use crate::state::{DateBounds, FilterState, MetricOption, ALL_METRICS, ALL_MISSION_TYPES};
use serde::{Deserialize, Serialize};

/// Which arrangement of controls to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    /// An explicit flag wins; otherwise fall back to the viewport detector.
    pub fn resolve(explicit: Option<bool>, detected: bool) -> Self {
        if explicit.unwrap_or(detected) {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Layout::Mobile
    }
}

/// Visibility of the secondary selectors on mobile. Starts collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobilePanel {
    pub expanded: bool,
}

impl MobilePanel {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Shape of the date control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateControlVariant {
    /// A captioned dropdown of the five presets.
    PresetsOnly,
    /// A range calendar popover next to the preset dropdown.
    CalendarWithPresets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Facility,
    MissionType,
    Metric,
}

/// One entry in a selector menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Stable key for list rendering
    pub key: String,
    pub label: String,
    pub tooltip: String,
    /// Shows a check mark
    pub checked: bool,
    pub on_select: FilterIntent,
    /// Intent of the check mark's own hit region. `None` means the check mark is
    /// decoration and a click on it lands on the item.
    pub on_check: Option<FilterIntent>,
}

impl MenuItem {
    fn plain(key: &str, label: &str, on_select: FilterIntent) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            tooltip: label.to_string(),
            checked: false,
            on_select,
            on_check: None,
        }
    }

    /// Click on the item body.
    pub fn click(&self, sink: &impl FilterSink) {
        sink.dispatch(self.on_select.clone());
    }

    /// Click on the check mark. Dispatches exactly one intent.
    pub fn click_check(&self, sink: &impl FilterSink) {
        match &self.on_check {
            Some(intent) => sink.dispatch(intent.clone()),
            None => self.click(sink),
        }
    }
}

/// A dropdown selector: trigger text, optional count badge and its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorView {
    pub kind: SelectorKind,
    pub trigger: String,
    pub badge: Option<usize>,
    pub items: Vec<MenuItem>,
}

impl SelectorView {
    pub fn item(&self, key: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.key == key)
    }
}

/// The date control in either variant.
#[derive(Debug, Clone, PartialEq)]
pub struct DateControlView {
    pub variant: DateControlVariant,
    /// Calendar trigger text, only for [`DateControlVariant::CalendarWithPresets`]
    pub calendar_label: Option<String>,
    pub bounds: DateBounds,
    /// Active preset label shown on the preset trigger
    pub preset_label: String,
    pub presets: Vec<MenuItem>,
}

impl DateControlView {
    fn build(state: &FilterState, variant: DateControlVariant) -> Self {
        let presets = DatePreset::ALL
            .into_iter()
            .map(|preset| {
                let label = preset.label();
                let mut item =
                    MenuItem::plain(label, label, FilterIntent::DateRangeChange(label.to_string()));
                item.checked = state.date_range == label;
                item
            })
            .collect();
        let calendar_label = match variant {
            DateControlVariant::PresetsOnly => None,
            DateControlVariant::CalendarWithPresets => Some(labels::date_trigger_label(&state.date)),
        };
        Self {
            variant,
            calendar_label,
            bounds: state.date,
            preset_label: state.date_range.clone(),
            presets,
        }
    }

    /// Intent for a range picked in the calendar.
    pub fn pick_range(&self, bounds: DateBounds, sink: &impl FilterSink) {
        sink.dispatch(FilterIntent::CustomDateChange(bounds));
    }
}

/// Everything the filter bar renders for one prop snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBarView {
    pub layout: Layout,
    /// Mobile filter toggle; `None` on desktop
    pub toggle: Option<MobilePanel>,
    pub facility: Option<SelectorView>,
    pub mission_types: Option<SelectorView>,
    pub metrics: Option<SelectorView>,
    pub date: DateControlView,
}

impl FilterBarView {
    /// Build the view for one render.
    ///
    /// `metric_options` is `None` when no toggle handler was supplied; an empty list
    /// hides the metric selector too. The panel flag only matters on mobile.
    pub fn build(
        state: &FilterState,
        catalog: &FacilityCatalog,
        metric_options: Option<&[MetricOption]>,
        layout: Layout,
        panel: MobilePanel,
        variant: DateControlVariant,
    ) -> Self {
        let secondary_visible = match layout {
            Layout::Desktop => true,
            Layout::Mobile => panel.expanded,
        };
        let (facility, mission_types, metrics) = if secondary_visible {
            (
                Some(facility_selector(state, catalog)),
                Some(mission_type_selector(state, catalog)),
                metric_options
                    .filter(|options| !options.is_empty())
                    .map(|options| metric_selector(state, options)),
            )
        } else {
            (None, None, None)
        };

        Self {
            layout,
            toggle: layout.is_mobile().then_some(panel),
            facility,
            mission_types,
            metrics,
            date: DateControlView::build(state, variant),
        }
    }
}

fn facility_selector(state: &FilterState, catalog: &FacilityCatalog) -> SelectorView {
    SelectorView {
        kind: SelectorKind::Facility,
        trigger: labels::facility_label(&state.selected_hospital).to_string(),
        badge: None,
        // The current facility is only reflected on the trigger, never in the menu.
        items: catalog
            .facilities()
            .iter()
            .map(|facility| {
                MenuItem::plain(
                    facility,
                    labels::facility_label(facility),
                    FilterIntent::HospitalChange(facility.clone()),
                )
            })
            .collect(),
    }
}

fn mission_type_selector(state: &FilterState, catalog: &FacilityCatalog) -> SelectorView {
    let items = catalog
        .mission_types(&state.selected_hospital)
        .iter()
        .map(|robot_type| {
            let mut item = MenuItem::plain(
                robot_type,
                labels::mission_type_item_label(robot_type),
                FilterIntent::RobotTypeChange(robot_type.clone()),
            );
            if state.has_type(robot_type) {
                item.checked = true;
                item.on_check = Some(FilterIntent::RemoveRobotType(robot_type.clone()));
            }
            item
        })
        .collect();

    SelectorView {
        kind: SelectorKind::MissionType,
        trigger: labels::mission_type_trigger_label(&state.selected_robot_types),
        badge: labels::selection_badge(&state.selected_robot_types, ALL_MISSION_TYPES),
        items,
    }
}

fn metric_selector(state: &FilterState, options: &[MetricOption]) -> SelectorView {
    let items = options
        .iter()
        .map(|option| {
            let mut item = MenuItem::plain(
                &option.id,
                &option.label,
                FilterIntent::MetricToggle(option.id.clone()),
            );
            item.checked = state.shows_metric(&option.id);
            item
        })
        .collect();

    SelectorView {
        kind: SelectorKind::Metric,
        trigger: labels::metric_trigger_label(&state.visible_metrics),
        badge: labels::selection_badge(&state.visible_metrics, ALL_METRICS),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Recorder;
    use chrono::NaiveDate;

    fn catalog() -> FacilityCatalog {
        FacilityCatalog::from_pairs(vec![
            ("St. Mary", "Delivery"),
            ("St. Mary", "Disinfection"),
            ("Mercy General", "Delivery"),
            ("Mercy General", "Telepresence"),
        ])
    }

    fn metrics() -> Vec<MetricOption> {
        vec![
            MetricOption::new("all", "All Metrics"),
            MetricOption::new("uptime", "Uptime"),
            MetricOption::new("missions", "Missions Completed"),
        ]
    }

    fn desktop(state: &FilterState, options: Option<&[MetricOption]>) -> FilterBarView {
        FilterBarView::build(
            state,
            &catalog(),
            options,
            Layout::Desktop,
            MobilePanel::default(),
            DateControlVariant::CalendarWithPresets,
        )
    }

    fn mobile(state: &FilterState, panel: MobilePanel) -> FilterBarView {
        let options = metrics();
        FilterBarView::build(
            state,
            &catalog(),
            Some(options.as_slice()),
            Layout::Mobile,
            panel,
            DateControlVariant::CalendarWithPresets,
        )
    }

    #[test]
    fn test_layout_resolution() {
        assert_eq!(Layout::resolve(Some(true), false), Layout::Mobile);
        assert_eq!(Layout::resolve(Some(false), true), Layout::Desktop);
        assert_eq!(Layout::resolve(None, true), Layout::Mobile);
        assert_eq!(Layout::resolve(None, false), Layout::Desktop);
    }

    #[test]
    fn test_facility_click_dispatches_once() {
        let state = FilterState::default();
        let view = desktop(&state, None);
        let facility = view.facility.unwrap();
        let sink = Recorder::default();

        for item in &facility.items {
            item.click(&sink);
            assert_eq!(sink.take(), vec![FilterIntent::HospitalChange(item.key.clone())]);
        }
        assert_eq!(facility.items[0].label, "All Facilities");
    }

    #[test]
    fn test_facility_menu_never_marks_selection() {
        let state = FilterState {
            selected_hospital: "St. Mary".into(),
            ..FilterState::default()
        };
        let facility = desktop(&state, None).facility.unwrap();
        assert!(facility.items.iter().all(|item| !item.checked));
        assert_eq!(facility.trigger, "St. Mary");
    }

    #[test]
    fn test_mission_type_check_removes_without_selecting() {
        let state = FilterState {
            selected_hospital: "St. Mary".into(),
            selected_robot_types: vec!["Delivery".into()],
            ..FilterState::default()
        };
        let view = desktop(&state, None);
        let types = view.mission_types.unwrap();
        let sink = Recorder::default();

        let keys: Vec<&str> = types.items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["All", "Delivery", "Disinfection"]);

        let delivery = types.item("Delivery").unwrap();
        assert!(delivery.checked);
        delivery.click_check(&sink);
        assert_eq!(sink.take(), vec![FilterIntent::RemoveRobotType("Delivery".into())]);

        let disinfection = types.item("Disinfection").unwrap();
        assert!(!disinfection.checked);
        disinfection.click(&sink);
        assert_eq!(sink.take(), vec![FilterIntent::RobotTypeChange("Disinfection".into())]);
    }

    #[test]
    fn test_mission_type_trigger_and_badge() {
        let state = FilterState {
            selected_robot_types: vec!["Delivery".into(), "Telepresence".into()],
            ..FilterState::default()
        };
        let types = desktop(&state, None).mission_types.unwrap();
        assert_eq!(types.trigger, "Delivery +1");
        assert_eq!(types.badge, Some(2));

        let all = desktop(&FilterState::default(), None).mission_types.unwrap();
        assert_eq!(all.trigger, "All Mission Types");
        assert_eq!(all.badge, None);
        assert_eq!(all.items[0].label, "All Mission Types");
    }

    #[test]
    fn test_metric_selector_is_capability_gated() {
        let state = FilterState::default();
        assert!(desktop(&state, None).metrics.is_none());
        assert!(desktop(&state, Some(&[] as &[MetricOption])).metrics.is_none());

        let options = metrics();
        let view = desktop(&state, Some(options.as_slice()));
        let selector = view.metrics.unwrap();
        assert_eq!(selector.trigger, "All Metrics");
        assert_eq!(selector.badge, None);
    }

    #[test]
    fn test_metric_check_mark_toggles_through_item() {
        let state = FilterState {
            visible_metrics: vec!["uptime".into()],
            ..FilterState::default()
        };
        let options = metrics();
        let selector = desktop(&state, Some(options.as_slice())).metrics.unwrap();
        assert_eq!(selector.trigger, "1 Selected");
        assert_eq!(selector.badge, Some(1));

        let sink = Recorder::default();
        let uptime = selector.item("uptime").unwrap();
        assert!(uptime.checked);
        uptime.click_check(&sink);
        uptime.click(&sink);
        assert_eq!(
            sink.take(),
            vec![
                FilterIntent::MetricToggle("uptime".into()),
                FilterIntent::MetricToggle("uptime".into()),
            ]
        );
    }

    #[test]
    fn test_mobile_panel_toggle() {
        let state = FilterState::default();
        let mut panel = MobilePanel::default();

        let collapsed = mobile(&state, panel);
        assert_eq!(collapsed.toggle, Some(MobilePanel { expanded: false }));
        assert!(collapsed.facility.is_none());
        assert!(collapsed.mission_types.is_none());
        assert!(collapsed.metrics.is_none());

        panel.toggle();
        let expanded = mobile(&state, panel);
        assert!(expanded.facility.is_some());
        assert!(expanded.mission_types.is_some());
        assert!(expanded.metrics.is_some());

        panel.toggle();
        assert!(mobile(&state, panel).facility.is_none());
    }

    #[test]
    fn test_panel_state_does_not_affect_desktop() {
        let state = FilterState::default();
        let options = metrics();
        let build = |expanded| {
            FilterBarView::build(
                &state,
                &catalog(),
                Some(options.as_slice()),
                Layout::Desktop,
                MobilePanel { expanded },
                DateControlVariant::PresetsOnly,
            )
        };
        assert_eq!(build(false), build(true));
        assert!(build(false).toggle.is_none());
    }

    #[test]
    fn test_date_control_variants() {
        let state = FilterState {
            date: DateBounds::new(NaiveDate::from_ymd_opt(2024, 1, 5), None),
            ..FilterState::default()
        };
        let presets_only = FilterBarView::build(
            &state,
            &catalog(),
            None,
            Layout::Desktop,
            MobilePanel::default(),
            DateControlVariant::PresetsOnly,
        );
        assert_eq!(presets_only.date.calendar_label, None);
        assert_eq!(presets_only.date.presets.len(), 5);

        let with_calendar = desktop(&state, None);
        assert_eq!(with_calendar.date.calendar_label.as_deref(), Some("Jan 05, 2024"));
        assert_eq!(with_calendar.date.preset_label, "Last 7 Days");
    }

    #[test]
    fn test_preset_and_calendar_intents() {
        let view = desktop(&FilterState::default(), None);
        let sink = Recorder::default();

        view.date.presets[2].click(&sink);
        let jan5 = NaiveDate::from_ymd_opt(2024, 1, 5);
        let bounds = DateBounds::new(jan5, jan5);
        view.date.pick_range(bounds, &sink);

        assert_eq!(
            sink.take(),
            vec![
                FilterIntent::DateRangeChange("Last 30 Days".into()),
                FilterIntent::CustomDateChange(bounds),
            ]
        );
    }
}

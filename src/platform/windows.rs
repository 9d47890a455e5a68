use super::{non_blank, Locator, LocatorStrategy, PageRules, Platform};
use crate::parser::MarkupElement;

/// XAML language namespace, home of `x:Uid` and `x:Name`
pub const XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

const AUTOMATION_ID_ATTRIBUTE: &str = "AutomationProperties.AutomationId";

const BASE_WRAPPER_TYPE: &str = "WindowsElement";

const KNOWN_WRAPPER_TYPES: &[&str] = &[
    "AppBarButton",
    "AppBarToggleButton",
    "AutoSuggestBox",
    "Button",
    "CalendarDatePicker",
    "CalendarView",
    "CheckBox",
    "ComboBox",
    "CommandBar",
    "DatePicker",
    "FlipView",
    "GridView",
    "Hub",
    "HyperlinkButton",
    "InkToolbar",
    "ListBox",
    "ListView",
    "MenuFlyoutItem",
    "MenuFlyoutSubItem",
    "PasswordBox",
    "Pivot",
    "ProgressBar",
    "ProgressRing",
    "RadioButton",
    "Slider",
    "TextBlock",
    "TextBox",
    "TimePicker",
    "ToggleButton",
    "ToggleSwitch",
];

/// Rules for Windows XAML files (`.xaml`)
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsRules;

impl PageRules for WindowsRules {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn base_wrapper_type(&self) -> &'static str {
        BASE_WRAPPER_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "xaml"
    }

    fn known_wrapper_types(&self) -> &'static [&'static str] {
        KNOWN_WRAPPER_TYPES
    }

    /// Only `Page`-like roots are generated; user controls and resource
    /// dictionaries are skipped.
    fn accepts_root(&self, root: &MarkupElement) -> bool {
        root.name().contains("Page")
    }

    fn resolve_locator(&self, element: &MarkupElement) -> Option<Locator> {
        let uid = non_blank(element.attribute_ns(XAML_NAMESPACE, "Uid"));
        let automation_id = non_blank(element.attribute(AUTOMATION_ID_ATTRIBUTE));

        if let Some(value) = uid.or(automation_id) {
            return Some(Locator::new(LocatorStrategy::AutomationId, value));
        }

        non_blank(element.attribute_ns(XAML_NAMESPACE, "Name"))
            .map(|name| Locator::new(LocatorStrategy::Name, name))
    }
}

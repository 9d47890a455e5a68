use super::{non_blank, Locator, LocatorStrategy, PageRules, Platform};
use crate::parser::MarkupElement;

/// Android resource schema
pub const ANDROID_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";

const BASE_WRAPPER_TYPE: &str = "AndroidElement";

const KNOWN_WRAPPER_TYPES: &[&str] = &[
    "Button",
    "CheckBox",
    "DatePicker",
    "EditText",
    "RadioButton",
    "Spinner",
    "Switch",
    "TextView",
    "ToggleButton",
];

/// Rules for Android layout files (`.axml`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AndroidRules;

impl AndroidRules {
    /// Strip `+` and the `@id/` prefix from an `android:id` value.
    /// Blank input or a blank result yields `None`.
    pub fn normalize_id(raw: Option<&str>) -> Option<String> {
        let raw = non_blank(raw)?;
        let id = raw.replace('+', "").replace("@id/", "");
        if id.trim().is_empty() {
            None
        } else {
            Some(id)
        }
    }
}

impl PageRules for AndroidRules {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn base_wrapper_type(&self) -> &'static str {
        BASE_WRAPPER_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "axml"
    }

    fn known_wrapper_types(&self) -> &'static [&'static str] {
        KNOWN_WRAPPER_TYPES
    }

    fn accepts_root(&self, _root: &MarkupElement) -> bool {
        true
    }

    fn resolve_locator(&self, element: &MarkupElement) -> Option<Locator> {
        if let Some(id) = Self::normalize_id(element.attribute_ns(ANDROID_NAMESPACE, "id")) {
            return Some(Locator::new(LocatorStrategy::Id, id));
        }

        non_blank(element.attribute_ns(ANDROID_NAMESPACE, "contentDescription"))
            .map(|desc| Locator::new(LocatorStrategy::AndroidContentDesc, desc))
    }
}

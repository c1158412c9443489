#[cfg(test)]
mod tests {
    use super::super::global::{install, installed};
    use super::super::prototype::{StylePrototype, OFFSET_PROPERTIES};
    use super::super::styled::Styled;
    use crate::config::PartialConfig;
    use crate::style::{MemoryStyle, StyleDeclaration};
    use std::sync::Arc;

    fn prototype() -> Arc<StylePrototype> {
        Arc::new(StylePrototype::install(
            &MemoryStyle::new(),
            &PartialConfig::default(),
        ))
    }

    #[test]
    fn test_offsets_are_not_intercepted() {
        let proto = prototype();
        for offset in OFFSET_PROPERTIES {
            assert!(!proto.is_intercepted(offset), "{} should be skipped", offset);
        }
        assert!(proto.is_intercepted("width"));
        assert!(proto.is_intercepted("backgroundColor"));
        assert_eq!(
            proto.accessor_count(),
            MemoryStyle::new().property_names().len() - OFFSET_PROPERTIES.len()
        );
    }

    #[test]
    fn test_named_setter_rewrites() {
        let mut style = Styled::with_prototype(MemoryStyle::new(), prototype());
        style.set("width", "16px");
        style.set("borderTopLeftRadius", "8px");
        style.set("border", "-3.5px solid");
        style.set("backgroundImage", r#"url("a.png") 10px"#);

        assert_eq!(style.get("width"), "1rem");
        assert_eq!(style.get_property_value("border-top-left-radius"), "0.5rem");
        assert_eq!(style.get("border"), "-0.21875rem solid");
        assert_eq!(
            style.get("backgroundImage"),
            r#"url("a.png") 0.625rem"#
        );
    }

    #[test]
    fn test_offsets_keep_pixels_through_named_setter() {
        let mut style = Styled::with_prototype(MemoryStyle::new(), prototype());
        style.set("left", "10px");
        style.set("top", "32px");
        assert_eq!(style.get("left"), "10px");
        assert_eq!(style.get_property_value("top"), "32px");
    }

    #[test]
    fn test_set_property_rewrites_only_custom_properties() {
        let mut style = Styled::with_prototype(MemoryStyle::new(), prototype());
        style.set_property("--gap", "var(--x) 32px");
        style.set_property("margin", "32px");
        style.set_property("left", "32px");

        assert_eq!(style.get_property_value("--gap"), "var(--x) 2rem");
        assert_eq!(style.get_property_value("margin"), "32px");
        assert_eq!(style.get_property_value("left"), "32px");
    }

    #[test]
    fn test_values_at_threshold_stay_in_pixels() {
        let mut style = Styled::with_prototype(MemoryStyle::new(), prototype());
        style.set("borderWidth", "1px");
        style.set("outlineOffset", "0px");
        assert_eq!(style.get("borderWidth"), "1px");
        assert_eq!(style.get("outlineOffset"), "0px");
    }

    #[test]
    fn test_unknown_names_reach_native_setter() {
        let proto = Arc::new(StylePrototype::install(
            &MemoryStyle::with_properties(["width"]),
            &PartialConfig::default(),
        ));
        let mut style = Styled::with_prototype(MemoryStyle::new(), proto);
        style.set("maxWidth", "64px");
        style.set("width", "64px");
        assert_eq!(style.get_property_value("max-width"), "64px");
        assert_eq!(style.get_property_value("width"), "4rem");
    }

    #[test]
    fn test_writes_before_install_are_not_rewritten() {
        let mut raw = MemoryStyle::new();
        raw.set_property("width", "16px");

        let mut style = Styled::with_prototype(raw, prototype());
        assert_eq!(style.get("width"), "16px");
        style.set("height", "16px");
        assert_eq!(style.get("height"), "1rem");
    }

    #[test]
    fn test_prototype_is_shared_across_objects() {
        let proto = StylePrototype::install(
            &MemoryStyle::new(),
            &PartialConfig {
                root_value: Some(10.0),
                unit_precision: Some(2),
                ..Default::default()
            },
        );
        let mut a = MemoryStyle::new();
        let mut b = MemoryStyle::new();
        proto.set(&mut a, "fontSize", "15px");
        proto.set(&mut b, "lineHeight", "13.333px");
        assert_eq!(proto.get(&a, "fontSize"), "1.5rem");
        assert_eq!(proto.get(&b, "lineHeight"), "1.33rem");
    }

    #[test]
    fn test_unvalidated_extreme_precision_still_writes() {
        let proto = StylePrototype::install(
            &MemoryStyle::new(),
            &PartialConfig {
                unit_precision: Some(i32::MAX as u32),
                ..Default::default()
            },
        );
        let mut style = MemoryStyle::new();
        proto.set(&mut style, "width", "16px");
        proto.set_property(&mut style, "--gap", "8px");
        assert_eq!(proto.get(&style, "width"), "1rem");
        assert_eq!(style.get_property_value("--gap"), "0.5rem");
    }

    #[test]
    fn test_global_install_affects_existing_objects_and_last_wins() {
        // Only this test touches the process-wide slot.
        let mut early = Styled::new(MemoryStyle::new());

        let first = install(&MemoryStyle::new(), &PartialConfig::default());
        early.set("padding", "16px");
        assert_eq!(early.get("padding"), "1rem");

        let second = install(
            &MemoryStyle::new(),
            &PartialConfig {
                root_value: Some(8.0),
                ..Default::default()
            },
        );
        assert!(!Arc::ptr_eq(&first, &second));
        let current = installed().expect("prototype installed");
        assert!(Arc::ptr_eq(&current, &second));

        early.set("padding", "16px");
        assert_eq!(early.get("padding"), "2rem");

        let mut late = Styled::new(MemoryStyle::new());
        late.set_property("--space", "4px");
        assert_eq!(late.get_property_value("--space"), "0.5rem");
    }
}

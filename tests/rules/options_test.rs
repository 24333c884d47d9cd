use mdtidy_lib::config::Config;
use mdtidy_lib::rule::OptionKind;
use mdtidy_lib::rules::all_rules;

#[test]
fn test_option_descriptors_match_default_sections() {
    for rule in all_rules(&Config::default()) {
        let options = rule.options();
        if options.is_empty() {
            continue;
        }
        let Some((name, toml::Value::Table(section))) = rule.default_config_section() else {
            panic!("{} describes options but has no default section", rule.name());
        };
        assert_eq!(name, rule.name());
        for option in options {
            let value = section
                .get(option.name)
                .unwrap_or_else(|| panic!("{}: '{}' missing from default section", rule.name(), option.name));
            assert_eq!(value, &option.default.to_toml(), "{}: {}", rule.name(), option.name);
        }
        assert_eq!(section.len(), rule.options().len(), "{}: undocumented keys", rule.name());
    }
}

#[test]
fn test_dropdown_defaults_are_choices() {
    for rule in all_rules(&Config::default()) {
        for option in rule.options() {
            if let OptionKind::Dropdown(choices) = option.kind {
                let default = option.default.to_toml();
                let default = default.as_str().unwrap();
                assert!(choices.contains(&default), "{}: {}", rule.name(), option.name);
            }
        }
    }
}

#[test]
fn test_default_sections_round_trip_through_config() {
    let text = mdtidy_lib::config::default_config_toml().unwrap();
    let config = Config::from_toml_str(&text).unwrap();
    let set = mdtidy_lib::rules::build_rules(&config);
    assert!(set.errors.is_empty(), "{:?}", set.errors);
    assert_eq!(set.rules.len(), mdtidy_lib::rules::registry().len());
}

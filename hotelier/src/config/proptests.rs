//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0.01f64..10_000.0),
        prop::option::of(1usize..=500),
        prop::option::of(0.0f64..1_000.0),
        prop::option::of(format_strategy()),
    )
        .prop_map(
            |(default_base_price, max_rooms, minimum_room_price, output_format)| Config {
                default_base_price,
                max_rooms,
                minimum_room_price,
                output_format,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher source always win, unset fields fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.default_base_price, high.default_base_price.or(low.default_base_price));
        prop_assert_eq!(merged.max_rooms, high.max_rooms.or(low.max_rooms));
        prop_assert_eq!(merged.minimum_room_price, high.minimum_room_price.or(low.minimum_room_price));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // The empty config is an identity for merging
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(&from_empty, &config);
    }

    // Generated configs are in range and always validate
    #[test]
    fn config_in_range_validates(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Negative prices never validate
    #[test]
    fn config_negative_price_rejected(price in -10_000.0f64..-0.001) {
        let config = Config { default_base_price: Some(price), ..Default::default() };
        prop_assert!(ConfigValidator::validate(&config).is_err());
    }
}

//! End-to-end conversion scenarios through the public `Converter` API.

use anglicise::Converter;
use anglicise::config::{TemperatureSymbol, UnitConfig, WordConfig};

fn converter() -> Converter {
    Converter::new(UnitConfig::default(), WordConfig::default()).unwrap()
}

#[test]
fn test_license_noun_becomes_licence() {
    let output = converter()
        .convert_to_regional("I need a license to drive", false)
        .unwrap();
    assert_eq!(output, "I need a licence to drive");
}

#[test]
fn test_license_verb_keeps_spelling() {
    let output = converter()
        .convert_to_regional("We will license our software", false)
        .unwrap();
    assert_eq!(output, "We will license our software");
}

#[test]
fn test_feet_convert_to_metres() {
    let output = converter()
        .convert_to_regional("The room is 12 feet wide", false)
        .unwrap();
    assert_eq!(output, "The room is 3.7 metres wide");
}

#[test]
fn test_code_block_preserved_comment_converted() {
    let input = "\
Adjust the color first.

```python
color = palette.load()  # my favorite color
print(color)
```
";
    let output = converter().convert_to_regional(input, false).unwrap();
    assert!(output.starts_with("Adjust the colour first.\n"));
    assert!(output.contains("color = palette.load()  # my favourite colour"));
    assert!(output.contains("print(color)"));
}

#[test]
fn test_ignore_directive_skips_next_line() {
    let input = "\
<!-- m2e-ignore -->
The color here stays American.
The color here converts.
";
    let output = converter().convert_to_regional(input, false).unwrap();
    assert!(output.contains("The color here stays American."));
    assert!(output.contains("The colour here converts."));
}

#[test]
fn test_mit_license_untouched() {
    let output = converter()
        .convert_to_regional("Distributed under the MIT license.", false)
        .unwrap();
    assert_eq!(output, "Distributed under the MIT license.");
}

#[test]
fn test_ignore_file_directive() {
    let input = "// m2e-ignore-file\nThe color is gray and the room is 12 feet wide.\n";
    let output = converter().convert_to_regional(input, false).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_temperature_conversion() {
    let output = converter()
        .convert_to_regional("It reached 72 degrees Fahrenheit by noon", false)
        .unwrap();
    assert_eq!(output, "It reached 22.2\u{b0}C by noon");

    let word_config = UnitConfig {
        temperature_symbol: TemperatureSymbol::Word,
        ..Default::default()
    };
    let converter = Converter::new(word_config, WordConfig::default()).unwrap();
    let output = converter
        .convert_to_regional("It reached 72 degrees Fahrenheit by noon", false)
        .unwrap();
    assert_eq!(output, "It reached 22.2 degrees Celsius by noon");
}

#[test]
fn test_compound_measurement() {
    let output = converter()
        .convert_to_regional("They built a 6-foot fence", false)
        .unwrap();
    assert_eq!(output, "They built a 1.8-metre fence");
}

#[test]
fn test_written_numbers() {
    let output = converter()
        .convert_to_regional("We walked six miles to the station", false)
        .unwrap();
    assert_eq!(output, "We walked 9.7 kilometres to the station");
}

#[test]
fn test_mixed_document() {
    let input = "My favorite color is gray. The analyzer needs a license to run, \
and its cabinet is 6 feet tall.";
    let output = converter().convert_to_regional(input, false).unwrap();
    assert_eq!(
        output,
        "My favourite colour is grey. The analyser needs a licence to run, \
and its cabinet is 1.8 metres tall."
    );
}

#[test]
fn test_disabled_units_leave_measurements() {
    let unit_config = UnitConfig {
        enabled: false,
        ..Default::default()
    };
    let converter = Converter::new(unit_config, WordConfig::default()).unwrap();
    let output = converter
        .convert_to_regional("The gray wall is 12 feet wide", false)
        .unwrap();
    assert_eq!(output, "The grey wall is 12 feet wide");
}

#[test]
fn test_disabled_words_leave_spelling() {
    let word_config = WordConfig {
        enabled: false,
        ..Default::default()
    };
    let converter = Converter::new(UnitConfig::default(), word_config).unwrap();
    let output = converter
        .convert_to_regional("The gray wall is 12 feet wide", false)
        .unwrap();
    assert_eq!(output, "The gray wall is 3.7 metres wide");
}

#[test]
fn test_invalid_config_rejected() {
    let unit_config = UnitConfig {
        precision: 99,
        ..Default::default()
    };
    assert!(Converter::new(unit_config, WordConfig::default()).is_err());

    let word_config = WordConfig {
        min_confidence: 1.5,
        ..Default::default()
    };
    assert!(Converter::new(UnitConfig::default(), word_config).is_err());
}

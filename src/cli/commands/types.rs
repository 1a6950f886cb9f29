use crate::translation::{AudioFormat, InputType, OutputType};
use crate::ui::Style;

/// Prints every input type, output type and audio format to stdout.
///
/// Needs no server.
pub fn print_types() {
    print_section("Input types", &InputType::keys(), InputType::default().key());
    println!();
    print_section("Output types", &OutputType::keys(), OutputType::default().key());
    println!();
    print_section("Audio formats", &AudioFormat::keys(), AudioFormat::default().key());
}

fn print_section(title: &str, keys: &[&str], default: &str) {
    println!("{}", Style::header(title));
    for key in keys {
        if *key == default {
            println!("  {} {}", Style::code(key), Style::secondary("(default)"));
        } else {
            println!("  {}", Style::code(key));
        }
    }
}

//! End-to-end tests over realistic stylesheets.

use chartpal::{
    color_name, extract_named_colors, generate_accessible_palette, import_text,
    parse_colors, to_stylesheet, unique_colors, Color, ColorConfig, Import,
};

const SHADCN: &str = include_str!("fixtures/shadcn.css");
const TOKENS: &str = include_str!("fixtures/tokens.css");

fn hex(colors: &[Color]) -> Vec<String> {
    colors.iter().map(Color::to_string).collect()
}

#[test]
fn shadcn_chart_slots_for_both_modes() {
    let config = parse_colors(SHADCN);
    assert_eq!(
        hex(&config.light),
        ["#E76E50", "#2A9D90", "#274754", "#E8C468", "#F4A462"]
    );
    assert_eq!(
        hex(&config.dark),
        ["#2662D9", "#2EB88A", "#E88C30", "#AF57DB", "#E23670"]
    );
}

#[test]
fn shadcn_named_colors_only_integer_triples() {
    let pool = extract_named_colors(SHADCN);
    let names: Vec<&str> = pool.iter().map(|c| c.name.as_str()).collect();
    // Triples with fractional parts (`222.2 84% 4.9%`) are not picked up.
    assert_eq!(
        names,
        [
            "background",
            "primary-foreground",
            "chart-1",
            "chart-2",
            "chart-3",
            "chart-4",
            "chart-5",
            "foreground",
            "chart-1",
            "chart-2",
            "chart-3",
            "chart-4",
            "chart-5",
        ]
    );
}

#[test]
fn shadcn_suggestions_have_requested_length() {
    let pool = extract_named_colors(SHADCN);
    let config = parse_colors(SHADCN).fitted(chartpal::DEFAULT_SLOTS);
    let palette = generate_accessible_palette(&pool, config.active_count());
    assert_eq!(palette.len(), chartpal::DEFAULT_SLOTS);
}

#[test]
fn references_resolve_through_aliases() {
    let config = parse_colors(TOKENS);
    assert_eq!(hex(&config.light), ["#2563EB", "#FFFFFF"]);
    assert!(config.dark.is_empty());
}

#[test]
fn chart_slots_with_hsl_triples() {
    let config = parse_colors(":root { --chart-1: 220 100% 50%; --chart-2: 0 0% 0%; }");
    assert_eq!(hex(&config.light), ["#0055FF", "#000000"]);
    assert!(config.dark.is_empty());
}

#[test]
fn empty_input_gives_empty_config() {
    assert_eq!(parse_colors(""), ColorConfig::default());
}

#[test]
fn hex_pool_to_palette() {
    let css = "--red-500: #EF4444; --red-100: #FEE2E2; --blue-500: #3B82F6; --green-600: #16A34A;";
    let pool = extract_named_colors(css);
    assert_eq!(pool.len(), 4);

    let palette = generate_accessible_palette(&pool, 3);
    assert_eq!(hex(&palette), ["#EF4343", "#468AF6", "#1CCA5B"]);
}

#[test]
fn three_families_keep_their_hues() {
    let css = "--red-500: #EF4444; --blue-500: #3B82F6; --green-600: #16A34A;";
    let pool = extract_named_colors(css);
    let palette = generate_accessible_palette(&pool, 3);

    let family_hues: Vec<u16> = pool.iter().map(|c| chartpal::hex_to_hsl(c.value).h).collect();
    for (color, expected) in palette.iter().zip(&family_hues) {
        let hue = chartpal::hex_to_hsl(*color).h;
        let diff = hue.abs_diff(*expected).min(360 - hue.abs_diff(*expected));
        assert!(diff <= 1, "hue {} drifted from {}", hue, expected);
    }

    let lightness: Vec<u8> = palette.iter().map(|c| chartpal::hex_to_hsl(*c).l).collect();
    assert!(lightness.iter().all(|l| (45..=70).contains(l)));
}

#[test]
fn export_then_parse_is_stable() {
    let config = parse_colors(SHADCN);
    let exported = to_stylesheet(&config);
    assert_eq!(parse_colors(&exported), config);
}

#[test]
fn pasted_stylesheet_and_swatches() {
    let imported = import_text(SHADCN).unwrap();
    let Import::Stylesheet { config, named } = imported else {
        panic!("expected a stylesheet import");
    };

    let swatches = unique_colors(&named, &config);
    // Pool colors come first; chart colors are already in the pool.
    assert_eq!(swatches[0].to_string(), "#FFFFFF");
    assert_eq!(color_name(&named, swatches[0]), "background");
    assert!(swatches.contains(&config.light[0]));
}

#[test]
fn pasted_hex_list_reports_skips() {
    let imported = import_text("F7F6F7, BAD!!, DEDCDF").unwrap();
    let Import::Tokens(manual) = imported else {
        panic!("expected a token import");
    };
    assert_eq!(hex(&manual.config.light), ["#F7F6F7", "#DEDCDF"]);
    assert_eq!(manual.skipped, ["BAD!!"]);
}

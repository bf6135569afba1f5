use strokekit::{icons, RenderOptions};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("strokekit - render catalog icons as SVG");
        println!();
        println!("Usage: strokekit [OPTIONS] <ICON-NAME>");
        println!();
        println!("Writes the rendered SVG for a catalog icon to stdout.");
        println!();
        println!("Options:");
        println!("  -h, --help                   Show this help message");
        println!("  -l, --list                   List catalog icon names");
        println!("      --size <N>               Rendered width/height in px");
        println!("      --color <COLOR>          Stroke color (default: currentColor)");
        println!("      --stroke-width <N>       Stroke width before scaling");
        println!("      --absolute-stroke-width  Do not scale stroke width with size");
        println!("      --class <CLASS>          class attribute on the svg element");
        println!();
        println!("Example:");
        println!("  strokekit --size 48 --color '#e11d48' heart");
        return;
    }

    if args.iter().any(|a| a == "-l" || a == "--list") {
        for name in icons::names() {
            println!("{}", name);
        }
        return;
    }

    let mut opts = RenderOptions::default();
    let mut name: Option<String> = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--size" => opts.size = Some(numeric_value(iter.next(), "--size")),
            "--color" => opts.color = Some(flag_value(iter.next(), "--color")),
            "--stroke-width" => {
                opts.stroke_width = Some(numeric_value(iter.next(), "--stroke-width"))
            }
            "--absolute-stroke-width" => opts.absolute_stroke_width = Some(true),
            "--class" => opts.class = Some(flag_value(iter.next(), "--class")),
            other if other.starts_with('-') => {
                eprintln!("Error: unknown option: {}", other);
                std::process::exit(1);
            }
            other => name = Some(other.to_string()),
        }
    }

    let name = match name {
        Some(n) => n,
        None => {
            eprintln!("Error: no icon name provided (try --list)");
            std::process::exit(1);
        }
    };

    match strokekit::render(&name, &opts) {
        Ok(svg) => println!("{}", svg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn flag_value(value: Option<&String>, flag: &str) -> String {
    match value {
        Some(v) => v.clone(),
        None => {
            eprintln!("Error: {} requires a value", flag);
            std::process::exit(1);
        }
    }
}

fn numeric_value(value: Option<&String>, flag: &str) -> f64 {
    let raw = flag_value(value, flag);
    match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: {} expects a number, got '{}'", flag, raw);
            std::process::exit(1);
        }
    }
}

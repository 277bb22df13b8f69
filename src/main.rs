//! Headless demo of the colour sampler panel.
//!
//! Builds a 270x300 panel, clicks the ring, the square, a recent colour and a
//! harmony sample, drags a sample out, and prints what a host would see.

use std::cell::RefCell;
use std::rc::Rc;

use hue_sampler::selectors::ChannelGroupKind;
use hue_sampler::{
    COLOR_MIME_TYPE, ColorSamplerPanel, Harmony, RecentColorsHistory, Rgb, SamplerConfig,
};
use sampler_ui::{Event, MouseButton, Point};

const PANEL_WIDTH: f32 = 270.0;
const PANEL_HEIGHT: f32 = 300.0;

fn init_logging(config: &SamplerConfig) {
    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();
}

fn click(panel: &mut ColorSamplerPanel, x: f32, y: f32) {
    let position = Point::new(x, y);
    panel.on_event(&Event::MousePressed {
        button: MouseButton::Left,
        position,
    });
    panel.on_event(&Event::MouseReleased {
        button: MouseButton::Left,
        position,
    });
}

fn describe(label: &str, panel: &ColorSamplerPanel) {
    let rgb = panel.color().rgb();
    let hsv = panel.color().hsv();
    println!(
        "{label:<12} rgb=({:.3}, {:.3}, {:.3}) hsv=({:.3}, {:.3}, {:.3}) RGB{:?} HSV{:?}",
        rgb.r,
        rgb.g,
        rgb.b,
        hsv.h,
        hsv.s,
        hsv.v,
        panel.spin_values(ChannelGroupKind::Rgb),
        panel.spin_values(ChannelGroupKind::Hsv),
    );
}

fn main() {
    let config = SamplerConfig::load_from_default_path().unwrap_or_default();
    init_logging(&config);

    let history = Rc::new(RefCell::new(RecentColorsHistory::new(
        config.history_capacity,
    )));
    let mut panel = ColorSamplerPanel::from_config(&config, Rc::clone(&history));
    panel.resize(PANEL_WIDTH, PANEL_HEIGHT);
    panel.on_color_selected(|rgb: &Rgb| {
        log::info!("colour selected: ({:.3}, {:.3}, {:.3})", rgb.r, rgb.g, rgb.b);
    });

    let wheel = panel.layout().wheel;
    let center = wheel.center();
    let outer = wheel.width.min(wheel.height) / 2.0;
    describe("initial", &panel);

    // hue ring, left of centre
    click(&mut panel, center.x - 0.95 * outer, center.y);
    describe("ring", &panel);

    // saturation/value square, upper left quadrant
    click(&mut panel, center.x - 0.2 * outer, center.y - 0.2 * outer);
    describe("square", &panel);

    let recent = panel.layout().recent;
    click(&mut panel, recent.x + 10.0, recent.y + recent.height / 2.0);
    describe("recent", &panel);

    panel.toggle_harmony(Harmony::Triadic);
    panel.toggle_harmony(Harmony::Complementary);
    println!("harmony palette:");
    for sample in panel.harmony_palette().iter() {
        let rgb = sample.hsv.to_rgb();
        println!(
            "  #{:<2} h={:.3} rgb=({:.3}, {:.3}, {:.3})",
            sample.index, sample.hsv.h, rgb.r, rgb.g, rgb.b
        );
    }

    // harmony sample below centre, then drag one out of the band to the right
    click(&mut panel, center.x, center.y + 0.73 * outer);
    describe("sample", &panel);

    let band = Point::new(center.x + 0.73 * outer, center.y);
    panel.on_event(&Event::MousePressed {
        button: MouseButton::Left,
        position: band,
    });
    let drag = panel.on_event(&Event::MouseMoved {
        position: Point::new(band.x, band.y + 40.0),
    });
    panel.on_event(&Event::MouseReleased {
        button: MouseButton::Left,
        position: Point::new(band.x, band.y + 40.0),
    });

    match drag {
        Some(payload) => {
            println!("drag {} {:02x?}", payload.mime, payload.bytes());
            match panel.drop_data(COLOR_MIME_TYPE, &payload.bytes()) {
                Ok(_) => describe("dropped", &panel),
                Err(e) => eprintln!("Drop failed: {e}"),
            }
        }
        None => println!("no drag started"),
    }

    if let Err(e) = panel.drop_data("text/plain", b"#ff0000") {
        println!("rejected drop: {e}");
    }

    println!("recent colours: {}", history.borrow().len());
    println!("draw commands: {}", panel.render().len());
}

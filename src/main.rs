use eframe::egui;
use studyscope::{
    core::deep_link::DeepLink,
    gui::StudyScopeApp,
};

fn main() -> eframe::Result {
    // An optional page link may be handed over on the command line, either
    // as a bare query string or a studyscope://open?... url.
    let deep_link = std::env::args().nth(1).map(|arg| {
        let query = arg.strip_prefix("studyscope://open?").unwrap_or(arg.as_str());
        DeepLink::parse(query)
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "StudyScope",
        options,
        Box::new(move |cc| Ok(Box::new(StudyScopeApp::new(cc, deep_link)))),
    )
}

use std::io::Write;

use mixer_probe_core::models::card::CardReport;
use mixer_probe_core::models::config::ProbeConfiguration;
use mixer_probe_core::render::text::render_report;
use mixer_probe_core::storage::document;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "mixer-probe: {}", record.args()))
        .init();
}

fn main() {
    init_logging();

    let config = ProbeConfiguration::from_env().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        ProbeConfiguration::default()
    });

    if let Some(cards) = probe() {
        emit(&cards, &config);
    }
}

#[cfg(target_os = "linux")]
fn probe() -> Option<Vec<CardReport>> {
    use mixer_probe_alsa::AlsaHost;
    use mixer_probe_core::session::probe::ProbeSession;

    let session = ProbeSession::new(AlsaHost::new());
    match session.probe_cards() {
        Ok(cards) => Some(cards),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn probe() -> Option<Vec<CardReport>> {
    log::error!("no ALSA backend on this platform");
    None
}

fn emit(cards: &[CardReport], config: &ProbeConfiguration) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.output_format.wants_json() {
        match document::to_json(cards, config.pretty_json) {
            Ok(json) => {
                if let Err(e) = writeln!(out, "{}", json) {
                    log::error!("failed to write report: {}", e);
                    return;
                }
            }
            Err(e) => log::error!("{}", e),
        }
    }

    if config.output_format.wants_text() {
        if let Err(e) = out.write_all(render_report(cards).as_bytes()) {
            log::error!("failed to write report: {}", e);
        }
    }
}

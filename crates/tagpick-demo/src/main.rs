#![forbid(unsafe_code)]

//! tagpick demo binary entry point.

use std::io;
use std::time::Duration;

use tagpick::{Frame, MultiSelectProps, Presenter, SelectStyle};
use tagpick_demo::app::App;
use tagpick_demo::cli::{self, Opts};
use tagpick_demo::session::{SessionOptions, TerminalSession};
use tagpick_demo::{catalog, logging};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    let opts = cli::Opts::parse();
    if let Err(err) = run(&opts) {
        eprintln!("tagpick-demo: {err}");
        std::process::exit(1);
    }
}

fn run(opts: &Opts) -> tagpick::Result<()> {
    if let Some(path) = &opts.log_file {
        logging::init(path, opts.log_json)?;
    }

    let options = match &opts.options_file {
        Some(path) => catalog::load(path)?,
        None => catalog::builtin(),
    };
    tracing::info!(options = options.len(), value = ?opts.value, "starting demo");

    let props = MultiSelectProps::new("tags", options)
        .label(opts.label.as_str())
        .placeholder(opts.placeholder.as_str())
        .size(opts.size)
        .value(opts.value.iter().cloned())
        .on_value_change(|value| tracing::info!(?value, "value changed"));
    let mut picker = tagpick::multi_select(props)?.with_style(SelectStyle::preset(opts.theme));
    picker.focus();
    let mut app = App::new(picker);

    let session = TerminalSession::new(SessionOptions {
        alternate_screen: true,
        mouse_capture: opts.mouse,
        bracketed_paste: true,
        focus_events: true,
    })?;
    let mut presenter = Presenter::new(io::stdout());

    while !app.should_quit() {
        let (width, height) = session.size()?;
        let mut frame = Frame::with_hit_grid(width, height);
        app.render(&mut frame);
        presenter.present(&frame)?;

        if !session.poll_event(POLL_INTERVAL)? {
            continue;
        }
        if let Some(event) = session.read_event()? {
            app.handle_event(&event, &frame);
        }
    }

    tracing::info!(value = ?app.picker().value(), "demo finished");
    Ok(())
}

#![forbid(unsafe_code)]

//! Domo demo showcase.
//!
//! Drives the fixed demonstration scenario: build a "home mode" scene
//! (light + AC + speaker on), execute it, switch the light back off, undo
//! to the all-off state, redo home mode, and print the operation journal
//! along the way.
//!
//! # Running
//!
//! ```sh
//! cargo run -p domo-demo-showcase
//! ```
//!
//! Device side effects appear as `tracing` events on stdout; the journal
//! is printed after each phase and dumped as JSON at the end.

use domo_core::{AirConditioner, Command, Light, PowerOffCmd, PowerOnCmd, Scene, Speaker, shared};
use domo_remote::{RemoteConfig, RemoteControl};

fn print_journal(remote: &RemoteControl) {
    println!("===== operation journal =====");
    for record in remote.journal().records() {
        println!("{record}");
    }
    println!("=============================");
    println!();
}

fn run(remote: &mut RemoteControl, cmd: Box<dyn Command>) {
    if let Err(err) = remote.execute(cmd) {
        eprintln!("command failed: {err}");
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    tracing::info!("domo demo showcase starting");

    // Receivers.
    let light = shared(Light::new("living room light"));
    let ac = shared(AirConditioner::new("bedroom AC"));
    let speaker = shared(Speaker::new("kitchen speaker"));

    // Home mode: light + AC + speaker, as one reversible unit.
    let mut home_mode = Scene::new("home mode");
    home_mode.push(Box::new(PowerOnCmd::new(light.clone())));
    home_mode.push(Box::new(PowerOnCmd::new(ac.clone())));
    home_mode.push(Box::new(PowerOnCmd::new(speaker.clone())));

    let mut remote = RemoteControl::new(RemoteConfig::default());

    run(&mut remote, Box::new(home_mode));
    run(&mut remote, Box::new(PowerOffCmd::new(light.clone())));
    print_journal(&remote);

    // Back to the all-off state, then bring home mode back.
    if let Some(Err(err)) = remote.undo() {
        eprintln!("undo failed: {err}");
    }
    if let Some(Err(err)) = remote.undo() {
        eprintln!("undo failed: {err}");
    }
    if let Some(Err(err)) = remote.redo() {
        eprintln!("redo failed: {err}");
    }
    print_journal(&remote);

    // Journal export (serde feature on domo-remote).
    match serde_json::to_string_pretty(remote.journal().records()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("journal export failed: {err}"),
    }
}

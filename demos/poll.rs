//! Drives the controller through a scripted sequence of button presses on the
//! in-memory runtime and prints what each feature reports per tick.
//!
//! Run with `RUST_LOG=debug cargo run --example poll` to see the runtime logs.

use vrinput::backends::virtual_runtime::VirtualRuntime;
use vrinput::{ActionManifest, Feature, InputConfig, InputController};

fn main() {
    env_logger::init();

    let config = InputConfig::default();
    let manifest = ActionManifest::for_config(&config);
    let runtime = VirtualRuntime::with_manifest(manifest.clone());
    let mut input = InputController::new(runtime, &config);

    let issues = input.validate(&manifest);
    println!("Validation: {} issue(s)", issues.len());

    // (tick, feature, pressed)
    let script = [
        (1, Feature::NextTrack, true),
        (3, Feature::NextTrack, false),
        (2, Feature::PushToTalk, true),
        (5, Feature::PushToTalk, false),
        (4, Feature::LeftHandPlayspaceMove, true),
        (6, Feature::LeftHandPlayspaceMove, false),
        (6, Feature::StopTrack, true),
        (7, Feature::StopTrack, false),
    ];

    for tick in 0..8 {
        for (_, feature, pressed) in script.iter().filter(|(t, _, _)| *t == tick) {
            input
                .gateway_mut()
                .set_pressed(feature.action_name(), *pressed);
        }

        input.refresh();
        let snap = input.snapshot().expect("catalog actions are digital");
        let active: Vec<String> = snap.active().map(|f| f.to_string()).collect();
        println!("tick {tick}: [{}]", active.join(", "));

        // Sleep a touch so the output reads like a live loop
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
}

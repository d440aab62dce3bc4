//! End-to-end pipeline tests: a real consumer process stand-in listens on a
//! Unix socket, the simulation runs against it, and the byte stream the
//! consumer observes is checked against the expected records.

use std::io::Read;
use std::net::Ipv4Addr;
use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::thread::JoinHandle;

use spegel_capture::QueueTap;
use spegel_config::{ExportConfig, SimulatorConfig};
use spegel_export::ExportSession;
use spegel_sim::{Scenario, Simulator, Transfer};
use spegel_telemetry::MetricsRecorder;

fn scratch_socket(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "spegel-pipeline-{}-{}.sock",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

/// Accepts exactly one connection and reads the stream until EOF.
fn spawn_consumer(listener: UnixListener) -> JoinHandle<String> {
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = String::new();
        stream.read_to_string(&mut received).unwrap();
        received
    })
}

fn run_scenario(socket_path: &PathBuf, scenario: &Scenario) -> MetricsRecorder {
    let export = ExportConfig {
        socket_path: socket_path.clone(),
        ..ExportConfig::default()
    };
    let metrics = MetricsRecorder::new();

    let session = ExportSession::connect(&export).unwrap();
    let mut sim = Simulator::new(&SimulatorConfig::default());
    sim.load_scenario(scenario).unwrap();
    QueueTap::new(session, sim.clock(), metrics.clone()).attach(sim.hooks_mut());
    sim.run().unwrap();
    // Dropping the simulator drops the handlers and with them the session,
    // closing the stream so the consumer sees EOF.
    drop(sim);
    metrics
}

#[test]
fn acceptance_scenario_delivers_exactly_one_record() {
    let path = scratch_socket("acceptance");
    let consumer = spawn_consumer(UnixListener::bind(&path).unwrap());

    let metrics = run_scenario(&path, &Scenario::default());

    assert_eq!(consumer.join().unwrap(), "10.1.1.1\t10.1.1.2\t512");
    assert_eq!(metrics.exported_records.get(), 1.0);
    assert_eq!(metrics.removal_events.get(), 1.0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn admissions_arrive_in_event_order_and_removals_never_do() {
    let path = scratch_socket("ordering");
    let consumer = spawn_consumer(UnixListener::bind(&path).unwrap());

    let transfers: Vec<Transfer> = [(1.0, 512), (2.0, 256), (3.0, 534)]
        .iter()
        .map(|&(at_s, size)| Transfer {
            at_s,
            source: Ipv4Addr::new(10, 1, 1, 1),
            destination: Ipv4Addr::new(10, 1, 1, 2),
            size,
        })
        .collect();
    let metrics = run_scenario(&path, &Scenario { transfers });

    // No framing on the wire: the consumer sees the in-order concatenation
    // of the admission records, and nothing for the three removals.
    assert_eq!(
        consumer.join().unwrap(),
        "10.1.1.1\t10.1.1.2\t512\
         10.1.1.1\t10.1.1.2\t256\
         10.1.1.1\t10.1.1.2\t534"
    );
    assert_eq!(metrics.exported_records.get(), 3.0);
    assert_eq!(metrics.removal_events.get(), 3.0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn startup_fails_fast_without_listener() {
    let path = scratch_socket("fail-fast");
    let export = ExportConfig {
        socket_path: path,
        ..ExportConfig::default()
    };
    // No listener was bound: the session must refuse to come up.
    assert!(ExportSession::connect(&export).is_err());
}

#[test]
fn binary_exits_non_zero_without_listener() {
    let path = scratch_socket("binary-fail-fast");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_spegel"))
        .arg("run")
        .arg("--socket")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    // The failure happens at session setup, before any simulated event: the
    // run never reaches the simulation-start log line.
    let logs = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!logs.contains("Starting simulation"), "logs: {logs}");
}

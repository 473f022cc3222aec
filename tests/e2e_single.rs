mod support_single;

use std::fs;
use std::net::TcpListener;

use tempfile::tempdir;

use support_single::{run_orderstorm, spawn_venue_stub_or_skip};

#[test]
fn e2e_sweep_against_stub_venue() -> Result<(), String> {
    let Some((url, _venue)) = spawn_venue_stub_or_skip()? else {
        return Ok(());
    };

    let args = vec![
        "--url".to_owned(),
        url,
        "--levels".to_owned(),
        "1,2".to_owned(),
        "--duration".to_owned(),
        "1s".to_owned(),
        "--actors".to_owned(),
        "3".to_owned(),
        "--no-charts".to_owned(),
    ];

    let output = run_orderstorm(args)?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Sweep summary:") {
        return Err(format!("Expected comparison block, got: {}", stdout));
    }
    if !stdout.contains("Level 1 (1 concurrent orders):") {
        return Err(format!("Expected level block, got: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_unreachable_venue_still_reports() -> Result<(), String> {
    // Bind then drop to find a port nothing is listening on.
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind probe failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("probe addr failed: {}", err))?;
        format!("http://{}", addr)
    };

    let args = vec![
        "--url".to_owned(),
        url,
        "--levels".to_owned(),
        "1".to_owned(),
        "--duration".to_owned(),
        "1s".to_owned(),
        "--no-setup".to_owned(),
        "--no-charts".to_owned(),
    ];

    let output = run_orderstorm(args)?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("success_rate: 0.00%") {
        return Err(format!("Expected zero success rate, got: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_charts_are_written() -> Result<(), String> {
    let Some((url, _venue)) = spawn_venue_stub_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let charts_path = dir.path().join("charts");

    let args = vec![
        "--url".to_owned(),
        url,
        "--levels".to_owned(),
        "1".to_owned(),
        "--duration".to_owned(),
        "1s".to_owned(),
        "--actors".to_owned(),
        "2".to_owned(),
        "--charts-path".to_owned(),
        charts_path.to_string_lossy().into_owned(),
    ];

    let output = run_orderstorm(args)?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let entries = fs::read_dir(&charts_path)
        .map_err(|err| format!("read charts dir failed: {}", err))?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "png"))
        .count();
    if entries != 2 {
        return Err(format!("Expected 2 chart files, found {}", entries));
    }
    Ok(())
}

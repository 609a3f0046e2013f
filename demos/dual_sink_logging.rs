use histlog::logger_config;

fn main() {
    // Debug mode: everything down to debug reaches both sinks in extended
    // format. Stderr shows the lines as they happen; the queue keeps them
    // for later inspection.
    let router = logger_config().with_debug(true).init_global();

    log::trace!("finding mount points"); // below debug, dropped everywhere
    log::debug!("scanning /home");
    log::info!("3 tabs restored");
    log::warn!("bookmark file not writable");
    log::error!("preview failed: timeout");

    let history = router.snapshot();
    println!("--- history queue ({} entries) ---", history.len());
    for line in history {
        println!("{line}");
    }
}

// b2du: A tool for informing you of the used space in Backblaze B2.
#![forbid(unsafe_code)]
use anyhow::{
    bail,
    Context,
    Result,
};
use std::future::{
    self,
    Future,
};
use std::io::{
    self,
    Write,
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{
    info,
    warn,
};

mod aggregator;
mod cli;
mod common;
mod s3;

use aggregator::Aggregator;
use common::{
    running_total,
    SizeReport,
};

// Redraws the running total on stderr whenever it changes, until the
// aggregation drops its end of the channel.
async fn show_progress(mut progress: watch::Receiver<u64>) {
    while progress.changed().await.is_ok() {
        let bytes = *progress.borrow_and_update();

        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{}", running_total(bytes));
        let _ = stderr.flush();
    }

    eprintln!();
}

// The first interrupt cancels the aggregation after the current page. This
// returns on the second, so the caller can give up on a stalled request.
// If the signal can't be listened for, this never returns.
async fn cancel_on_interrupt<F, Fut>(cancel: CancellationToken, mut interrupt: F)
where
    F:   FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    if interrupt().await.is_err() {
        return future::pending().await;
    }

    info!("Interrupted, stopping after the current page");
    cancel.cancel();

    if interrupt().await.is_err() {
        return future::pending().await;
    }

    warn!("Interrupted again, exiting");
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(cli::log_level(&matches))
        .with_writer(io::stderr)
        .init();

    let config = cli::client_config(&matches)?;

    let bucket_name       = config.bucket_name.clone();
    let (tx, rx)          = watch::channel(0);
    let cancel            = CancellationToken::new();
    let show_progress_bar = cli::show_progress(&matches);

    let progress = show_progress_bar
        .then(|| tokio::spawn(show_progress(rx)));

    let interrupts = cancel_on_interrupt(cancel.clone(), tokio::signal::ctrl_c);

    // Listing is run on its own task so the progress display stays live.
    let aggregation = tokio::spawn(async move {
        let client = s3::Client::new(&config).await;

        Aggregator::new(&client)
            .with_progress(tx)
            .with_cancellation(cancel)
            .aggregate(&config.bucket_name)
            .await
    });

    let result = tokio::select! {
        result = aggregation => result.context("Aggregation task failed")?,
        _      = interrupts  => bail!("Interrupted while sizing '{}'", bucket_name),
    };

    if let Some(progress) = progress {
        progress.await.context("Progress task failed")?;
    }

    let result = result
        .with_context(|| format!("Failed to size bucket '{}'", bucket_name))?;

    println!("{}", SizeReport::new(&bucket_name, result));

    Ok(())
}

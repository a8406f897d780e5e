// Model download helper for the sentence embedding model.
//
// Fetches all-MiniLM-L6-v2 (tokenizer + ONNX export, ~90MB) from HuggingFace
// into a platform data directory (~/.local/share/jobseeker/models/ on Linux)
// so it persists across restarts. Runs once, at startup, before the model is
// loaded.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::onnx::{MODEL_FILE, TOKENIZER_FILE};

/// HuggingFace repo for the sentence embedding model.
const EMBEDDING_HF_URL: &str =
    "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main";

/// Remote paths, relative to the repo root.
const REMOTE_MODEL_FILE: &str = "onnx/model.onnx";
const REMOTE_TOKENIZER_FILE: &str = "tokenizer.json";

/// Default directory for the embedding model files.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jobseeker")
        .join("models")
        .join("all-MiniLM-L6-v2")
}

/// Check whether both required embedding model files exist.
pub fn embedding_files_present(dir: &Path) -> bool {
    dir.join(MODEL_FILE).exists() && dir.join(TOKENIZER_FILE).exists()
}

/// Make sure the model files are in `dir`, downloading missing ones when
/// `auto_download` is set.
pub async fn ensure_model(dir: &Path, auto_download: bool) -> Result<()> {
    if embedding_files_present(dir) {
        return Ok(());
    }

    if !auto_download {
        anyhow::bail!(
            "Embedding model not found in {}. Set EMBEDDING_AUTO_DOWNLOAD=true or place {} and {} there.",
            dir.display(),
            MODEL_FILE,
            TOKENIZER_FILE
        );
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    let client = reqwest::Client::new();
    for (remote, local) in [
        (REMOTE_TOKENIZER_FILE, TOKENIZER_FILE),
        (REMOTE_MODEL_FILE, MODEL_FILE),
    ] {
        let dest = dir.join(local);
        if dest.exists() {
            info!("{} already exists, skipping", dest.display());
            continue;
        }
        download_file(&client, &format!("{EMBEDDING_HF_URL}/{remote}"), &dest).await?;
    }

    Ok(())
}

/// Download a single file from a URL to a local path.
async fn download_file(client: &reqwest::Client, url: &str, dest: &Path) -> Result<()> {
    info!("Downloading {}...", url);

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {url}"))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    // Write to a sibling temp file first so a partial download never looks complete.
    let partial = dest.with_extension("part");
    std::fs::write(&partial, &bytes)
        .with_context(|| format!("Failed to write {}", partial.display()))?;
    std::fs::rename(&partial, dest)
        .with_context(|| format!("Failed to move download into {}", dest.display()))?;

    info!("Downloaded {} ({} bytes) to {}", url, bytes.len(), dest.display());
    Ok(())
}

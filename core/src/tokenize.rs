use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use tiktoken_rs::{CoreBPE, get_bpe_from_model};

/// Deterministic `text -> token count` capability.
///
/// The benchmark only needs counts, so the seam is exactly that narrow; the
/// concrete backend can be swapped without touching the runner.
pub trait TokenCounter {
    fn count(&self, text: &str) -> Result<u64>;
}

// BPE construction is expensive, so encoders are built once per model for
// the lifetime of the process.
static ENCODERS: Lazy<Mutex<HashMap<String, Arc<CoreBPE>>>> = Lazy::new(|| Mutex::new(HashMap::new()));

fn encoder_for_model(model: &str) -> Result<Arc<CoreBPE>> {
    let mut cache = ENCODERS.lock().map_err(|_| anyhow!("tokenizer cache poisoned"))?;
    if let Some(bpe) = cache.get(model) {
        return Ok(Arc::clone(bpe));
    }
    let bpe = Arc::new(
        get_bpe_from_model(model).with_context(|| format!("load tokenizer for model '{}'", model))?,
    );
    cache.insert(model.to_string(), Arc::clone(&bpe));
    tracing::debug!(model, "built tokenizer encoder");
    Ok(bpe)
}

/// Counts tokens with a tiktoken BPE encoder resolved from a model name
/// (e.g. `gpt-4`). Counting uses ordinary encoding, so special-token text is
/// treated as plain text and the count is stable for a given model + input.
pub struct TiktokenCounter {
    bpe: Arc<CoreBPE>,
    model: String,
}

impl TiktokenCounter {
    pub fn for_model(model: &str) -> Result<Self> {
        Ok(Self {
            bpe: encoder_for_model(model)?,
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TokenCounter for TiktokenCounter {
    fn count(&self, text: &str) -> Result<u64> {
        Ok(self.bpe.encode_ordinary(text).len() as u64)
    }
}

/// Reads `path` as UTF-8 text and counts its tokens. Read and decode
/// failures name the offending path so the caller can attribute them to the
/// enclosing scenario.
pub fn count_file(counter: &dyn TokenCounter, path: &Path) -> Result<u64> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    counter.count(&text).with_context(|| format!("tokenize {}", path.display()))
}

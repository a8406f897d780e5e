// Sentence embeddings from all-MiniLM-L6-v2 run locally through ONNX Runtime.
//
// Each text is tokenized (truncated to the model's 256 word-piece limit), run
// through the BERT encoder, and mean-pooled over the attention mask into a
// single 384-dimensional vector.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info};

use super::{EmbeddingError, EmbeddingProvider};

/// Embedding dimension for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// Longest input, in word pieces, the model was trained on.
const MAX_SEQ_LEN: usize = 256;

pub const MODEL_FILE: &str = "model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Sentence embedder backed by a local ONNX session.
///
/// `Session::run` needs `&mut`, so inference is serialized through a mutex.
/// The tokenizer is read-only after load.
pub struct SentenceEmbedder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl SentenceEmbedder {
    /// Load the model and tokenizer from `model_dir`.
    ///
    /// Expects `model.onnx` and `tokenizer.json` in the directory; see
    /// `download::ensure_model`.
    pub fn load(model_dir: &Path) -> Result<Self, EmbeddingError> {
        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);

        for path in [&model_path, &tokenizer_path] {
            if !path.exists() {
                return Err(EmbeddingError::ModelNotFound(path.clone()));
            }
        }

        let session = Session::builder()
            .map_err(|e| EmbeddingError::Load {
                path: model_path.clone(),
                source: e.into(),
            })?
            .commit_from_file(&model_path)
            .map_err(|e| EmbeddingError::Load {
                path: model_path.clone(),
                source: e.into(),
            })?;

        let mut tokenizer =
            Tokenizer::from_file(&tokenizer_path).map_err(|e| EmbeddingError::Load {
                path: tokenizer_path.clone(),
                source: e,
            })?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| EmbeddingError::Load {
                path: tokenizer_path.clone(),
                source: e,
            })?;
        // Single-text batches never need padding.
        tokenizer.with_padding(None);

        info!("Loaded sentence embedding model from {}", model_dir.display());

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }
}

impl EmbeddingProvider for SentenceEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(EmbeddingError::Tokenize)?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let seq_len = input_ids.len();
        let token_type_ids = vec![0_i64; seq_len];

        let shape = [1_i64, seq_len as i64];
        let input_ids_tensor =
            Tensor::from_array((shape, input_ids)).map_err(|e| EmbeddingError::Inference {
                context: "input_ids tensor",
                source: e.into(),
            })?;
        let attention_mask_tensor = Tensor::from_array((shape, attention_mask.clone()))
            .map_err(|e| EmbeddingError::Inference {
                context: "attention_mask tensor",
                source: e.into(),
            })?;
        let token_type_ids_tensor =
            Tensor::from_array((shape, token_type_ids)).map_err(|e| EmbeddingError::Inference {
                context: "token_type_ids tensor",
                source: e.into(),
            })?;

        // last_hidden_state: [1, seq_len, 384]
        let hidden_states = {
            let mut session = self
                .session
                .lock()
                .map_err(|_| EmbeddingError::LockPoisoned)?;

            let outputs = session
                .run(ort::inputs! {
                    "input_ids" => input_ids_tensor,
                    "attention_mask" => attention_mask_tensor,
                    "token_type_ids" => token_type_ids_tensor
                })
                .map_err(|e| EmbeddingError::Inference {
                    context: "session run",
                    source: e.into(),
                })?;

            let (_shape, data) = outputs[0].try_extract_tensor::<f32>().map_err(|e| {
                EmbeddingError::Inference {
                    context: "extract last_hidden_state",
                    source: e.into(),
                }
            })?;

            data.to_vec()
        };

        let expected = seq_len * EMBEDDING_DIM;
        if hidden_states.len() != expected {
            return Err(EmbeddingError::OutputShape {
                expected,
                actual: hidden_states.len(),
            });
        }

        let embedding = mean_pool(&hidden_states, &attention_mask, EMBEDDING_DIM);
        debug!(tokens = seq_len, dim = EMBEDDING_DIM, "Computed sentence embedding");

        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }
}

/// Average the token rows of `hidden_states` whose attention mask is set.
///
/// `hidden_states` is row-major `[mask.len(), dim]`. Returns zeros when the
/// mask is empty.
pub fn mean_pool(hidden_states: &[f32], mask: &[i64], dim: usize) -> Vec<f32> {
    let mut sum = vec![0.0_f64; dim];
    let mut mask_sum = 0.0_f64;

    for (token, &m) in mask.iter().enumerate() {
        if m == 0 {
            continue;
        }
        let weight = m as f64;
        mask_sum += weight;
        let row = &hidden_states[token * dim..(token + 1) * dim];
        for (acc, &value) in sum.iter_mut().zip(row) {
            *acc += value as f64 * weight;
        }
    }

    if mask_sum > 0.0 {
        for value in &mut sum {
            *value /= mask_sum;
        }
    }

    sum.into_iter().map(|v| v as f32).collect()
}

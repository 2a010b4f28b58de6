//! ONNX Runtime zero-shot scorer for NLI entailment models.
//!
//! Scores each (abstract, hypothesis) pair with a binary-entailment NLI
//! model (deberta-v3 zeroshot-v2 family exported to ONNX: entailment
//! logit first, not-entailment second). The model directory must
//! contain `model.onnx` and `tokenizer.json`.

use std::path::Path;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::info;

use mdtriage_core::{ScoreMap, TriageError, labels};

use crate::scorer::{Scorer, hypothesis_for};

/// Premise/hypothesis pairs scored per session run.
const PAIR_BATCH_SIZE: usize = 64;
/// Token budget per pair; longer abstracts are truncated.
const MAX_LENGTH: usize = 512;

/// Zero-shot classifier over the triage label taxonomy.
///
/// One entailment inference per (text, label) pair, so each text costs
/// `label_count()` rows; rows are packed into fixed-size sub-batches.
/// Scores are independent sigmoid-style probabilities per label
/// (multi-label), not a softmax across labels.
#[derive(Debug)]
pub struct ZeroShotScorer {
    session: Session,
    tokenizer: Tokenizer,
    hypotheses: Vec<String>,
    has_token_type_ids: bool,
}

impl ZeroShotScorer {
    /// Load a model from a directory containing `model.onnx` and `tokenizer.json`.
    pub fn load(model_dir: &Path) -> anyhow::Result<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        anyhow::ensure!(model_path.exists(), "model.onnx not found in {model_dir:?}");
        anyhow::ensure!(
            tokenizer_path.exists(),
            "tokenizer.json not found in {model_dir:?}"
        );

        let session = Session::builder()?.commit_from_file(&model_path)?;
        let has_token_type_ids = session
            .inputs()
            .iter()
            .any(|input| input.name() == "token_type_ids");

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("load tokenizer: {e}"))?;

        // Longest-first truncation eats the premise before the short
        // hypothesis sentence.
        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: MAX_LENGTH,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("set truncation: {e}"))?;

        // Pad all pairs in a sub-batch to the same length.
        tokenizer.with_padding(Some(tokenizers::PaddingParams {
            ..Default::default()
        }));

        let hypotheses = labels::all_labels()
            .iter()
            .map(|label| hypothesis_for(label))
            .collect();

        info!(
            labels = labels::label_count(),
            model = %model_path.display(),
            "loaded zero-shot model"
        );
        Ok(Self {
            session,
            tokenizer,
            hypotheses,
            has_token_type_ids,
        })
    }

    /// Entailment probability for each (premise, hypothesis) pair.
    fn entailment_batch(&mut self, pairs: &[(String, String)]) -> anyhow::Result<Vec<f32>> {
        if pairs.is_empty() {
            return Ok(vec![]);
        }

        let batch_size = pairs.len();

        let inputs: Vec<tokenizers::EncodeInput> = pairs
            .iter()
            .map(|(premise, hypothesis)| {
                tokenizers::EncodeInput::Dual(premise.as_str().into(), hypothesis.as_str().into())
            })
            .collect();
        let encodings = self
            .tokenizer
            .encode_batch(inputs, true)
            .map_err(|e| anyhow::anyhow!("tokenize: {e}"))?;

        let seq_len = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0);

        // Build flat input tensors: [batch_size, seq_len].
        let mut input_ids = vec![0i64; batch_size * seq_len];
        let mut attention_mask = vec![0i64; batch_size * seq_len];
        let mut token_type_ids = vec![0i64; batch_size * seq_len];

        for (i, encoding) in encodings.iter().enumerate() {
            let offset = i * seq_len;
            for (j, &id) in encoding.get_ids().iter().enumerate() {
                input_ids[offset + j] = id as i64;
            }
            for (j, &mask) in encoding.get_attention_mask().iter().enumerate() {
                attention_mask[offset + j] = mask as i64;
            }
            for (j, &tid) in encoding.get_type_ids().iter().enumerate() {
                token_type_ids[offset + j] = tid as i64;
            }
        }

        let shape = [batch_size as i64, seq_len as i64];

        let ids_tensor = Tensor::from_array((shape, input_ids.into_boxed_slice()))?;
        let mask_tensor = Tensor::from_array((shape, attention_mask.into_boxed_slice()))?;

        let outputs = if self.has_token_type_ids {
            let type_tensor = Tensor::from_array((shape, token_type_ids.into_boxed_slice()))?;
            self.session.run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            ])?
        } else {
            self.session.run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
            ])?
        };

        // Extract logits: [batch_size, 2] with entailment first.
        let (output_shape, logits) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = output_shape;
        anyhow::ensure!(
            dims.len() == 2 && dims[0] as usize == batch_size && dims[1] == 2,
            "unexpected logits shape: {dims:?}, expected [{batch_size}, 2]"
        );

        let probs = (0..batch_size)
            .map(|i| {
                let entail = logits[i * 2];
                let not_entail = logits[i * 2 + 1];
                // Softmax over the two classes.
                1.0 / (1.0 + (not_entail - entail).exp())
            })
            .collect();

        Ok(probs)
    }
}

impl Scorer for ZeroShotScorer {
    fn score(&mut self, texts: &[&str]) -> Result<Vec<ScoreMap>, TriageError> {
        let n_labels = labels::label_count();

        let mut pairs = Vec::with_capacity(texts.len() * n_labels);
        for &text in texts {
            for hypothesis in &self.hypotheses {
                pairs.push((text.to_string(), hypothesis.clone()));
            }
        }

        let mut probs = Vec::with_capacity(pairs.len());
        for chunk in pairs.chunks(PAIR_BATCH_SIZE) {
            let batch = self
                .entailment_batch(chunk)
                .map_err(|e| TriageError::ScorerUnavailable(e.to_string()))?;
            probs.extend(batch);
        }

        probs
            .chunks(n_labels)
            .map(|scores| ScoreMap::new(scores.to_vec()))
            .collect()
    }
}

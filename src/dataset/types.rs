use serde::{Deserialize, Serialize};

/// One evaluated question/answer pair. Field names follow the dataset
/// export columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Reference Answer")]
    pub reference_answer: String,
    #[serde(rename = "Model Answer")]
    pub model_answer: String,
    #[serde(rename = "ADAMS_Score")]
    pub adams_score: f64,
}

/// Worked question and answer shown beside the weight sliders.
pub const SAMPLE_QUERY: &str =
    "What are the key benefits of using RAG systems in healthcare applications?";
pub const SAMPLE_RESPONSE: &str = "RAG systems in healthcare offer several key benefits: 1) Access to up-to-date medical research and guidelines, 2) Reduced hallucination through grounded responses, 3) Compliance with regulatory requirements through traceable sources, and 4) Personalized patient care through dynamic information retrieval.";

/// Column headers, in export order.
pub const COLUMNS: [&str; 4] = ["Question", "Reference Answer", "Model Answer", "ADAMS_Score"];

impl SampleRecord {
    fn new(question: &str, reference_answer: &str, model_answer: &str, adams_score: f64) -> Self {
        Self {
            question: question.to_string(),
            reference_answer: reference_answer.to_string(),
            model_answer: model_answer.to_string(),
            adams_score,
        }
    }
}

/// The static dataset loaded once the analysis animation completes.
pub fn sample_dataset() -> Vec<SampleRecord> {
    vec![
        SampleRecord::new(
            "What are the key benefits of using RAG systems in healthcare?",
            "RAG systems provide up-to-date medical information, reduce hallucinations, ensure compliance, and enable personalized care.",
            "RAG systems in healthcare offer several key benefits: 1) Access to up-to-date medical research and guidelines, 2) Reduced hallucination through grounded responses, 3) Compliance with regulatory requirements through traceable sources, and 4) Personalized patient care through dynamic information retrieval.",
            8.4,
        ),
        SampleRecord::new(
            "How do transformer architectures handle long sequences?",
            "Transformers use attention mechanisms but face quadratic complexity with sequence length, leading to various optimization techniques.",
            "Transformer architectures handle long sequences through self-attention mechanisms, though they face computational challenges due to quadratic complexity. Modern approaches include attention optimization, sparse attention patterns, and hierarchical processing.",
            8.9,
        ),
        SampleRecord::new(
            "What is the difference between supervised and unsupervised learning?",
            "Supervised learning uses labeled data for training, while unsupervised learning finds patterns in unlabeled data.",
            "Supervised learning algorithms learn from labeled training data to make predictions on new data, while unsupervised learning discovers hidden patterns and structures in data without labels, such as clustering and dimensionality reduction.",
            9.1,
        ),
    ]
}

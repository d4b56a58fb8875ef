pub mod cosine_similarity;

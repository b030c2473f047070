use rs_ngram_core::io::read_corpus_or_empty;
use rs_ngram_core::model::suggestion::{build_model, suggest_from_model};
use rs_ngram_core::pipeline::{compare_boundaries, train};
use rs_ngram_core::text::{START_MARKER, preprocessing_report};
use rs_ngram_core::{ProcessingOptions, process};

const SAMPLE: &str = "El gato negro come pescado fresco. El gato negro duerme en el sofá. \
    ¿Dónde duerme el perro? El perro negro duerme en el jardín. \
    El niño juega con el gato negro y el perro come pescado.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the first argument as a corpus file, or the built-in sample.
    // An unreadable file is processed as an empty corpus
    let text = match std::env::args().nth(1) {
        Some(path) => read_corpus_or_empty(path),
        None => SAMPLE.to_owned(),
    };

    // What normalization does to the raw text
    let report = preprocessing_report(&text);
    println!("Cleaned text: {}", report.cleaned_text);
    println!("Removed {} of {} words, symbols: {:?}", report.removed_word_count, report.original_word_count, report.removed_symbols);

    // Bigram analysis with the default comparison orders (2 is skipped, it is the primary order)
    let options = ProcessingOptions { n: 2, ..ProcessingOptions::default() };
    let result = process(&text, &options);
    println!("\n{} tokens", result.total_tokens);
    for (word, count) in result.word_counts.iter().take(5) {
        println!("  {word}: {count}");
    }
    for record in result.probabilities.values().filter(|r| r.context == "gato") {
        println!("  P({} | {}) = {:.3}", record.target, record.context, record.probability);
    }
    for (order, table) in &result.comparison {
        println!("  {order}-grams: {}", table.len());
    }

    // Autocomplete: build the model once, query it several times
    let tokens = rs_ngram_core::pipeline::tokenize(&text, false, true);
    let model = build_model(&tokens, 3)?;
    for query in ["el gato negro", "perro negro", "pescado"] {
        let response = suggest_from_model(&model, query, 5)?;
        println!("\n'{query}' -> context '{}'", response.context);
        for suggestion in &response.suggestions {
            println!("  {} ({:.2}, seen {} times)", suggestion.target, suggestion.probability, suggestion.ngram_frequency);
        }
    }

    // Raw next-word distribution of one context, straight from the model
    for (target, probability) in model.predict_next("gato negro") {
        println!("  P({target} | gato negro) = {probability:.3}");
    }

    // Asking for more than the corpus holds is reported, not fatal
    match train("gato negro", 5, false) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\n{e}"),
    }

    // Sentence boundaries add <s> and </s> transitions
    let comparison = compare_boundaries(&text, 2);
    println!(
        "\nWithout boundaries: {} bigrams, with boundaries: {} bigrams",
        comparison.without_boundaries.total_ngrams, comparison.with_boundaries.total_ngrams
    );
    // Records opening a sentence have the start marker as context
    for record in comparison.with_boundaries.top_records.iter().filter(|r| r.context_tokens().eq([START_MARKER])) {
        println!("  sentence starts with '{}' ({} times)", record.target, record.ngram_frequency);
    }

    Ok(())
}

/// Prompt asking the backend for a bullet-point news summary. The trailing
/// dash primes the model to continue the bullet list.
pub fn summarize_prompt(topic: &str, digest: &str) -> String {
    format!(
        "You are a helpful assistant.\n\
         \n\
         Summarize the following news about \"{}\" into clear, short bullet points.\n\
         \n\
         News:\n\
         {}\n\
         \n\
         Summary:\n\
         -",
        topic, digest
    )
}

/// RAG prompt grounding a follow-up answer in fresh web results, with the
/// prior summary attached as optional context.
pub fn followup_prompt(question: &str, web_context: &str, summary: &str) -> String {
    format!(
        "Answer the user's question using only the search results below. \
         If the answer is not there, say \"Not found.\"\n\
         \n\
         Question:\n\
         {}\n\
         \n\
         Search Results:\n\
         {}\n\
         \n\
         News Summary (optional context):\n\
         {}\n\
         \n\
         Answer:",
        question, web_context, summary
    )
}

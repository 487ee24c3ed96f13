const TEMPLATE_HEAD: &str = "\nYou are a helpful assistant. Answer the following question:\n\nQuestion: ";
const TEMPLATE_TAIL: &str = "\n\nAnswer:\n";

/// Fills the fixed question-answering template. The question is inserted
/// as-is; no escaping or trimming.
pub fn render_prompt(question: &str) -> String {
    let mut prompt = String::with_capacity(TEMPLATE_HEAD.len() + question.len() + TEMPLATE_TAIL.len());
    prompt.push_str(TEMPLATE_HEAD);
    prompt.push_str(question);
    prompt.push_str(TEMPLATE_TAIL);
    prompt
}

#[cfg(test)]
mod tests {
    use super::render_prompt;

    #[test]
    fn fills_template() {
        assert_eq!(
            render_prompt("What is 2+2?"),
            "\nYou are a helpful assistant. Answer the following question:\n\nQuestion: What is 2+2?\n\nAnswer:\n"
        );
    }

    #[test]
    fn braces_in_question_are_left_alone() {
        assert!(render_prompt("what does {question} mean?").contains("Question: what does {question} mean?\n"));
    }
}

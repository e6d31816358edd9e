use crate::models::Category;

const ANSWER_RULES: &str = "Tulis tepat satu pertanyaan singkat. \
Jangan beri penjelasan, nomor, judul, atau tanda kutip. \
Jawab hanya dengan pertanyaannya saja.";

/// Instruction sent to the text backend for one question.
pub fn question_instruction(category: Category) -> String {
    let tone = match category {
        Category::Friends => {
            "Buatkan pertanyaan santai dan seru untuk mencairkan suasana \
saat nongkrong bersama teman. Nadanya ringan, lucu, dan tidak terlalu pribadi."
        }
        Category::Couples => {
            "Buatkan pertanyaan yang menyentuh perasaan untuk memperdalam \
hubungan dengan pasangan (deep talk). Nadanya hangat, jujur, dan emosional."
        }
    };

    format!("{}\n\n{}", tone, ANSWER_RULES)
}

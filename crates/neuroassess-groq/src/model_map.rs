use std::borrow::Cow;

use neuroassess_core::model::Model;

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Groq(groq_model) => Cow::Borrowed(groq_model.id()),
        Model::Custom(custom) => custom.clone(),
    }
}

#[cfg(test)]
mod tests {
    use neuroassess_core::model::GroqModel;

    use super::*;

    #[test]
    fn maps_known_and_custom_models() {
        assert_eq!(map_model(&GroqModel::Llama3_8b.into()), "llama3-8b-8192");
        assert_eq!(
            map_model(&Model::Custom("my-finetune".into())),
            "my-finetune"
        );
    }
}

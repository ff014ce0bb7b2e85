use serde::Serialize;

/// How a question has to be fetched from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    Query,
    Params,
    Header,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub expected_answer: &'static str,
    pub delivery_method: DeliveryMethod,
}

impl Question {
    pub fn fetch_instruction(&self) -> String {
        let id = self.id;
        match self.delivery_method {
            DeliveryMethod::Query => format!("GET /question?id={id}"),
            DeliveryMethod::Params => format!("GET /question/{id}"),
            DeliveryMethod::Header => format!("GET /question with header X-Quiz-ID: {id}"),
            DeliveryMethod::Body => format!(r#"POST /question with JSON body {{ "id": {id} }}"#),
        }
    }

    pub fn answer_instruction(&self) -> String {
        format!(
            r#"POST /questions/{}/submit with body {{ "answer": "..." }}"#,
            self.id
        )
    }
}

//! User-facing texts returned in the JSON bodies.

pub const CREATED: &str = "Cadastro do pet e dono realizado com sucesso!";
pub const DELETED: &str = "Pet deletado com sucesso!";
pub const REQUIRED_FIELDS: &str = "Nome do dono, nome e espécie do pet são obrigatórios.";
pub const INVALID_BODY: &str = "Dados da requisição inválidos.";
pub const INVALID_ID: &str = "Identificador de pet inválido.";
pub const NOT_FOUND: &str = "Pet não encontrado.";
pub const INTERNAL_ERROR: &str = "Erro interno do servidor";

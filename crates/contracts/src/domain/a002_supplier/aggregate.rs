use serde::{Deserialize, Serialize};

/// Fornecedor (supplier) as served from `/api/suppliers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Payload for create/update of a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 2 {
            return Err("Nome deve ter pelo menos 2 caracteres".into());
        }
        if self.name.trim().len() > 100 {
            return Err("Nome deve ter no máximo 100 caracteres".into());
        }
        let phone_digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
        if !(10..=15).contains(&phone_digits) {
            return Err("Telefone inválido".into());
        }
        if !is_plausible_email(&self.email) {
            return Err("E-mail inválido".into());
        }
        if self.email.len() > 100 {
            return Err("E-mail deve ter no máximo 100 caracteres".into());
        }
        Ok(())
    }
}

// local-part@domain.tld, no spaces. Server does the strict check.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(phone: &str, email: &str) -> SupplierDto {
        SupplierDto {
            id: None,
            name: "Hortifruti Central".into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(dto("(11) 98765-4321", "vendas@hortifruti.com.br")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_phone() {
        assert!(dto("123", "vendas@hortifruti.com.br").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        assert!(dto("(11) 98765-4321", "sem-arroba").validate().is_err());
        assert!(dto("(11) 98765-4321", "a@semponto").validate().is_err());
    }
}

//! WhatsApp lead links. Every product and group page offers one so the customer opens a
//! chat with the rental desk already holding the product they looked at.

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}

pub fn product_message(name: &str, code: Option<&str>) -> String {
    match code {
        Some(code) => format!("Olá! Tenho interesse em alugar o produto {name} (código {code})."),
        None => format!("Olá! Tenho interesse em alugar o produto {name}."),
    }
}

pub fn group_message(base_name: &str, first: Option<u64>, last: Option<u64>) -> String {
    match (first, last) {
        (Some(first), Some(last)) if first != last => {
            format!("Olá! Tenho interesse em alugar o conjunto {base_name} (Nº{first} a Nº{last}).")
        }
        (Some(number), _) | (_, Some(number)) => {
            format!("Olá! Tenho interesse em alugar o conjunto {base_name} (Nº{number}).")
        }
        (None, None) => format!("Olá! Tenho interesse em alugar o conjunto {base_name}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_keeps_digits_only() {
        assert_eq!(
            whatsapp_link("+55 (11) 98765-4321", "Olá, tudo bem?"),
            "https://wa.me/5511987654321?text=Ol%C3%A1%2C%20tudo%20bem%3F"
        );
    }

    #[test]
    fn test_product_message() {
        assert_eq!(
            product_message("Maca Hospitalar", Some("MH3")),
            "Olá! Tenho interesse em alugar o produto Maca Hospitalar (código MH3)."
        );
        assert_eq!(
            product_message("Maca Hospitalar", None),
            "Olá! Tenho interesse em alugar o produto Maca Hospitalar."
        );
    }

    #[test]
    fn test_group_message_ranges() {
        assert_eq!(
            group_message("Afastador Hohmann", Some(1), Some(4)),
            "Olá! Tenho interesse em alugar o conjunto Afastador Hohmann (Nº1 a Nº4)."
        );
        assert_eq!(
            group_message("Afastador Hohmann", Some(2), Some(2)),
            "Olá! Tenho interesse em alugar o conjunto Afastador Hohmann (Nº2)."
        );
        assert_eq!(
            group_message("Trocarte", None, None),
            "Olá! Tenho interesse em alugar o conjunto Trocarte."
        );
    }
}

/// Строка прогноза: магазин, товар, прогноз спроса.
///
/// `demand == None` означает, что значение в исходной строке не разобралось.
/// Такая строка не выбрасывается: от числа строк зависят подписи графика.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub store: String,
    pub product: String,
    pub demand: Option<u64>,
}

/// Разбирает одну строку `store,product,demand`.
///
/// Деление по запятой без кавычек и экранирования: значение с запятой
/// внутри ломает разбор. Недостающие поля становятся пустыми строками.
pub fn decode_line(line: &str) -> ForecastRow {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(',');

    let store = fields.next().unwrap_or_default().to_string();
    let product = fields.next().unwrap_or_default().to_string();
    let demand = fields.next().and_then(parse_leading_int);

    ForecastRow {
        store,
        product,
        demand,
    }
}

/// Разбирает весь файл: первая строка заголовок, остальные данные
pub fn decode_csv(text: &str) -> Vec<ForecastRow> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').skip(1).map(decode_line).collect()
}

/// Целое из ведущих цифр: `"12"` → 12, `"12.7"` → 12, `" 7"` → 7.
/// Знак минус, отсутствие цифр или переполнение дают `None`.
fn parse_leading_int(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits_end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    if digits_end == 0 {
        return None;
    }
    raw[..digits_end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line() {
        assert_eq!(
            decode_line("S1,P1,10"),
            ForecastRow {
                store: "S1".to_string(),
                product: "P1".to_string(),
                demand: Some(10),
            }
        );
    }

    #[test]
    fn test_malformed_demand_is_unset() {
        let row = decode_line("S3,P3,notanumber");
        assert_eq!(row.store, "S3");
        assert_eq!(row.product, "P3");
        assert_eq!(row.demand, None);

        assert_eq!(decode_line("S,P,").demand, None);
        assert_eq!(decode_line("S,P").demand, None);
        assert_eq!(decode_line("S,P,-4").demand, None);
        assert_eq!(decode_line("S,P,99999999999999999999999").demand, None);
    }

    #[test]
    fn test_leading_integer_semantics() {
        assert_eq!(decode_line("S,P,12.7").demand, Some(12));
        assert_eq!(decode_line("S,P, 7").demand, Some(7));
        assert_eq!(decode_line("S,P,+5").demand, Some(5));
        assert_eq!(decode_line("S,P,8units").demand, Some(8));
        assert_eq!(decode_line("S,P,10\r").demand, Some(10));
    }

    #[test]
    fn test_embedded_comma_shifts_fields() {
        // кавычки не поддерживаются
        let row = decode_line("S1,\"Milk, 1L\",10");
        assert_eq!(row.product, "\"Milk");
        assert_eq!(row.demand, Some(1));
    }

    #[test]
    fn test_decode_csv_skips_header_and_keeps_every_row() {
        let rows = decode_csv("Store,Product,Forecasted Demand\nS1,P1,10\nS3,P3,notanumber\nS2,P2,7\n");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].demand, Some(10));
        assert_eq!(rows[1].demand, None);
        assert_eq!(rows[2].product, "P2");
    }

    #[test]
    fn test_decode_csv_handles_crlf_and_blank_input() {
        let rows = decode_csv("Store,Product,Forecasted Demand\r\nS1,P1,10\r\nS2,P2,7\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].demand, Some(7));

        assert!(decode_csv("").is_empty());
        assert!(decode_csv("  \n").is_empty());
        assert!(decode_csv("Store,Product,Forecasted Demand\n").is_empty());
    }
}

//! `${name}` 형식 템플릿 치환

use std::collections::HashMap;

/// 템플릿의 `${name}` 자리를 변수 값으로 치환합니다.
///
/// 값이 없는 변수가 하나라도 있으면 그 이름 목록(중복 제거, 등장 순)을 반환합니다.
/// 닫히지 않은 `${`는 그대로 둡니다.
///
/// ```rust,ignore
/// let vars = HashMap::from([("name".to_string(), "Kim".to_string())]);
/// assert_eq!(render("Hello ${name}", &vars)?, "Hello Kim");
/// ```
pub fn render(template: &str, variables: &HashMap<String, String>) -> Result<String, Vec<String>> {
    let mut output = String::with_capacity(template.len());
    let mut missing: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            output.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let key = after[..end].trim();
        match variables.get(key) {
            Some(value) => output.push_str(value),
            None => {
                if !missing.iter().any(|m| m == key) {
                    missing.push(key.to_string());
                }
            }
        }
        rest = &after[end + 1..];
    }
    output.push_str(rest);

    if missing.is_empty() {
        Ok(output)
    } else {
        Err(missing)
    }
}

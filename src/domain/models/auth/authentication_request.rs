/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 토큰 필수
    Required,
    /// 토큰이 있으면 검증, 없어도 통과
    Optional,
}

/// 라우트가 요구하는 역할
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredRole {
    role: String,
}

impl RequiredRole {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }

    /// 사용자 역할이 요구사항을 만족하는지 확인
    ///
    /// `admin` 역할은 모든 요구사항을 통과합니다.
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        user_roles.iter().any(|r| r == "admin" || *r == self.role)
    }

    /// 403 응답 메시지용 설명
    pub fn describe(&self) -> &str {
        &self.role
    }
}

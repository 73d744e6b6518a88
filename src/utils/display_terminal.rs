//! 시작 과정 터미널 출력
//!
//! 레지스트리 초기화 단계(컬렉션 준비, 서비스 연결)를 박스 제목과
//! 트리 형태로 보여줍니다.

const BOX_WIDTH: usize = 50;

/// 박스로 둘러싼 제목을 출력합니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🔄 INITIALIZING SERVICE REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

/// `→ Step 1: Preparing repositories`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 단계 완료와 처리 항목 수
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 하위 항목 한 줄 (`   ├─ allergies: ✓ Ready`)
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 초기화 완료 요약
///
/// ```text
///    🗂️ Collections: 18
///    🔧 Services: 4
/// ```
pub fn print_final_summary(collections: usize, services: usize) {
    println!();
    print_boxed_title("🎉 OPENCDX RECORDS READY");
    println!("   🗂️ Collections: {}", collections);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", collections + services);
    println!();
}

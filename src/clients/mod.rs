//! # 원격 호출 클라이언트 래퍼
//!
//! 다른 서비스가 레코드 서비스를 호출할 때 쓰는 타입 있는 클라이언트입니다.
//! 호출 한 번을 수행하고, 실패하면 서버가 보낸 상태 코드와 세부 정보를
//! 그대로 담은 [`ClientError`]로 바꿔 돌려줍니다. 재시도나 백오프는 하지 않습니다.
//!
//! ```rust,ignore
//! let channel = OpenCdxClient::new(ClientConfig::from_env())?;
//! let countries = EntityClient::<Country>::new(channel.clone(), "/country");
//! let credentials = CallCredentials::bearer(token);
//!
//! match countries.get("65f1c0c2a7b4d3e2f1a0b9c8", &credentials).await {
//!     Ok(country) => println!("{}", country.name),
//!     Err(e) if e.code == RpcCode::NotFound => println!("없음"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod client;
pub mod entity_client;
pub mod error;
pub mod notification_client;

pub use client::*;
pub use entity_client::*;
pub use error::*;
pub use notification_client::*;

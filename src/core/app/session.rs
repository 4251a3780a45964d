use reqwest::Client;

/// Connection details plus the id of the request whose answer we want.
pub struct SessionContext {
    pub client: Client,
    pub base_url: String,
    pub current_request_id: u64,
}

impl SessionContext {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            current_request_id: 0,
        }
    }

    pub fn next_request_id(&mut self) -> u64 {
        self.current_request_id = self.current_request_id.wrapping_add(1);
        self.current_request_id
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        self.current_request_id == request_id
    }
}

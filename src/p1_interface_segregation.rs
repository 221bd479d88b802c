// Pattern 1: Interface Segregation - Narrow Capability Traits
// A provider implements exactly the capabilities it offers; consumers depend
// on the narrowest trait that covers their need.

// ============================================================================
// Example: Segregated Capability Traits
// ============================================================================

trait CloudHosting {
    fn create_server(&self, region: &str) -> String;
    fn list_servers(&self, region: &str) -> String;
}

trait Cdn {
    fn cdn_address(&self) -> String;
}

trait CloudStorage {
    fn store_file(&self, name: &str) -> String;
    fn get_file(&self, name: &str) -> String;
}

// ============================================================================
// Example: A Full-Service Provider Implements All Three
// ============================================================================

struct Amazon;

impl CloudHosting for Amazon {
    fn create_server(&self, region: &str) -> String {
        format!("Creating a new server in {}", region)
    }

    fn list_servers(&self, region: &str) -> String {
        format!("Listing all servers available in {}", region)
    }
}

impl Cdn for Amazon {
    fn cdn_address(&self) -> String {
        "cdn.aws.example".to_string()
    }
}

impl CloudStorage for Amazon {
    fn store_file(&self, name: &str) -> String {
        format!("Storing {} in AWS", name)
    }

    fn get_file(&self, name: &str) -> String {
        format!("Getting {} from AWS", name)
    }
}

// ============================================================================
// Example: A Narrow Provider Implements Only What It Offers
// ============================================================================

// No hosting, no CDN. Nothing forces Dropbox to stub out methods it
// cannot honor.
struct Dropbox;

impl CloudStorage for Dropbox {
    fn store_file(&self, name: &str) -> String {
        format!("Storing {} in Dropbox", name)
    }

    fn get_file(&self, name: &str) -> String {
        format!("Getting {} from Dropbox", name)
    }
}

// ============================================================================
// Example: Consumers Depend on the Narrowest Trait
// ============================================================================

// Works with any storage provider, full-service or not.
fn back_up(storage: &dyn CloudStorage, name: &str) -> String {
    storage.store_file(name)
}

fn main() {
    println!("=== Interface Segregation Demo ===\n");

    let amazon = Amazon;
    let dropbox = Dropbox;

    println!("{}", amazon.create_server("eu-west-1"));
    println!("{}", amazon.list_servers("eu-west-1"));
    println!("CDN at {}", amazon.cdn_address());
    println!("{}", amazon.get_file("report.pdf"));
    println!("{}", dropbox.store_file("report.pdf"));

    // Same consumer, either provider
    println!("\n=== Narrow Consumer ===");
    for storage in [&amazon as &dyn CloudStorage, &dropbox as &dyn CloudStorage] {
        println!("{}", back_up(storage, "backup.tar"));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amazon_offers_all_capabilities() {
        let amazon = Amazon;
        assert_eq!(
            amazon.create_server("us-east-1"),
            "Creating a new server in us-east-1"
        );
        assert_eq!(amazon.cdn_address(), "cdn.aws.example");
        assert_eq!(amazon.store_file("a.txt"), "Storing a.txt in AWS");
    }

    #[test]
    fn dropbox_offers_storage_only() {
        let dropbox = Dropbox;
        assert_eq!(dropbox.get_file("a.txt"), "Getting a.txt from Dropbox");
    }

    #[test]
    fn narrow_consumer_accepts_any_storage() {
        assert_eq!(back_up(&Amazon, "x"), "Storing x in AWS");
        assert_eq!(back_up(&Dropbox, "x"), "Storing x in Dropbox");
    }
}

mod add_fake_gt;

pub use add_fake_gt::AddFakeGenotype;

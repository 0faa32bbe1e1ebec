pub mod add_fake_gt;

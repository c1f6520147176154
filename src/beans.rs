pub const BEANS: &str = r"
      __________
     / ()    () \
    | ()  ()  () |     c o o l   b e a n s
     \ ()    () /
      ----------
";
